use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::TaskAction;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use plandeck_types::TaskId;

pub fn handle(ctx: &ExecutionContext, id: String, format: OutputFormat) -> Result<()> {
    let store = ctx.store()?;
    let target = TaskId::new(id.clone());
    let tasks = store.list()?;

    let renderer = ConsoleRenderer::new(format);

    let Some(task) = tasks.iter().find(|task| task.id == target) else {
        // Unknown id: the store is left untouched
        return renderer.render(presenters::present_task_missing(&id, TaskAction::Completed));
    };

    let completed = !task.is_completed;
    store.update(&target, completed)?;

    let mut updated = task.clone();
    updated.is_completed = completed;
    renderer.render(presenters::present_task_toggled(&updated))
}
