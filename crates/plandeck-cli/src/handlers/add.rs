use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use plandeck_types::Task;

pub fn handle(
    ctx: &ExecutionContext,
    title: String,
    description: String,
    date: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let date = date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    // Validation happens here, at the entry surface; nothing is persisted
    // and the collection is untouched when any field is empty.
    if title.is_empty() || description.is_empty() || date.is_empty() {
        anyhow::bail!("please fill in all fields: title, description, and date must be non-empty");
    }

    let task = Task::new(title, description, date);
    ctx.store()?.add(task.clone())?;

    let result = presenters::present_task_added(&task);
    ConsoleRenderer::new(format).render(result)
}
