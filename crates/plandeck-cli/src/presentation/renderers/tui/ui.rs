use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use super::app::{AppState, InputMode};
use super::components::{
    AlertComponent, Component, EntryFormComponent, FooterComponent, TaskTableComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let alert_height = if state.alert.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(alert_height),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(f.area());

    if state.alert.is_some() {
        AlertComponent.render(f, chunks[0], state);
    }
    TaskTableComponent.render(f, chunks[1], state);
    FooterComponent.render(f, chunks[2], state);

    // Entry form floats above the table while editing
    if state.input_mode == InputMode::Editing {
        let area = centered_rect(60, 11, f.area());
        EntryFormComponent.render(f, area, state);
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = (r.width as u32 * percent_x as u32 / 100) as u16;
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(r.height),
    }
}
