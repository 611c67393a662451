use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::view_models::StatusLevel;

pub(crate) struct AlertComponent;

impl Component for AlertComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let Some(alert) = &state.alert else {
            return;
        };

        let color = match alert.level {
            StatusLevel::Success => Color::Green,
            StatusLevel::Info => Color::Blue,
            StatusLevel::Warning => Color::Yellow,
            StatusLevel::Error => Color::Red,
        };

        let banner = Paragraph::new(alert.message.as_str())
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        f.render_widget(banner, area);
    }
}
