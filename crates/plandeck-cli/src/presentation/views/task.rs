use std::fmt;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::presentation::view_models::{TaskActionViewModel, TaskListViewModel, TaskRowViewModel};

fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

// Pad before styling: ANSI escapes would otherwise count against the width.
fn styled_state(row: &TaskRowViewModel) -> String {
    let label = if row.is_completed { "done" } else { "open" };
    let padded = format!("{:<5}", label);
    if !color_enabled() {
        return padded;
    }
    if row.is_completed {
        padded.green().to_string()
    } else {
        padded.yellow().to_string()
    }
}

fn styled_text(row: &TaskRowViewModel, text: &str) -> String {
    if row.is_completed && color_enabled() {
        text.strikethrough().dimmed().to_string()
    } else {
        text.to_string()
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &TaskRowViewModel) -> fmt::Result {
    let mark = if row.is_completed { "✓" } else { " " };
    let text = format!("{} — {}", row.title, row.description);

    writeln!(
        f,
        "{} {} {:<36} {:<12} {}",
        mark,
        styled_state(row),
        row.id,
        row.date,
        styled_text(row, &text)
    )
}

impl fmt::Display for TaskListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            writeln!(f, "No tasks yet.")?;
            return Ok(());
        }

        writeln!(f, "  {:<5} {:<36} {:<12} TASK", "STATE", "ID", "DATE")?;
        writeln!(f, "{}", "-".repeat(80))?;

        for row in &self.tasks {
            write_row(f, row)?;
        }

        writeln!(
            f,
            "\n{} task(s), {} completed",
            self.total_count, self.completed_count
        )
    }
}

impl fmt::Display for TaskActionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.task {
            Some(row) => write_row(f, row),
            None => writeln!(f, "The collection was left unchanged."),
        }
    }
}
