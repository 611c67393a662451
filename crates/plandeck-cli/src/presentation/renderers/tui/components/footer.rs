use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::presentation::renderers::tui::app::{AppState, InputMode};

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let hints = match state.input_mode {
            InputMode::Normal => "a add · space/enter toggle · d delete · j/k move · q quit",
            InputMode::Editing => "type to edit · tab next field · enter save · esc cancel",
        };

        let footer_widget = Paragraph::new(Line::from(hints)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer_widget, area);
    }
}
