use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let tasks = ctx.store()?.list()?;

    let result = presenters::present_task_list(&tasks);
    ConsoleRenderer::new(format).render(result)
}
