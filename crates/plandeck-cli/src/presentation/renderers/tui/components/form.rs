use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Component;
use crate::presentation::renderers::tui::app::{AppState, FormField};

pub(crate) struct EntryFormComponent;

impl Component for EntryFormComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" New task — Enter saves, Tab cycles, Esc cancels ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(inner);

        let fields = [
            (FormField::Title, "Title", state.form.title.as_str()),
            (
                FormField::Description,
                "Description",
                state.form.description.as_str(),
            ),
            (FormField::Date, "Date", state.form.date.as_str()),
        ];

        for (i, (field, label, value)) in fields.into_iter().enumerate() {
            let focused = state.form.focus == field;
            let border_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };

            let input = Paragraph::new(value).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(label)
                    .border_style(border_style),
            );
            f.render_widget(input, chunks[i]);

            if focused {
                // Put the terminal cursor right after the typed text
                f.set_cursor_position((
                    chunks[i].x + 1 + value.chars().count() as u16,
                    chunks[i].y + 1,
                ));
            }
        }
    }
}
