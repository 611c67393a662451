use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct TaskTableComponent;

impl Component for TaskTableComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default().borders(Borders::ALL).title(" Tasks ");

        if state.tasks.is_empty() {
            let empty = Paragraph::new("No tasks yet — press 'a' to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let rows: Vec<Row> = state
            .tasks
            .iter()
            .map(|task| {
                let done = task.is_completed;

                let mark = if done { "✓" } else { " " };
                let text_style = if done {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                // The status cell flips label and color with completion
                let (status_label, status_style) = if done {
                    ("done", Style::default().fg(Color::Green))
                } else {
                    ("open", Style::default().fg(Color::Yellow))
                };

                Row::new(vec![
                    Cell::from(mark).style(Style::default().fg(Color::Green)),
                    Cell::from(task.title.clone()).style(text_style),
                    Cell::from(task.description.clone()).style(text_style),
                    Cell::from(task.date.clone()).style(text_style),
                    Cell::from(status_label).style(status_style),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(30),
                Constraint::Percentage(45),
                Constraint::Length(12),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec!["", "TITLE", "DESCRIPTION", "DATE", "STATE"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

        f.render_stateful_widget(table, area, &mut state.table_state);
    }
}
