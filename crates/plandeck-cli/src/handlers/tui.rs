use crate::context::ExecutionContext;
use crate::presentation::renderers::tui::PlannerTui;
use anyhow::Result;
use std::time::Duration;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let alert_timeout = Duration::from_secs(ctx.config()?.ui.alert_timeout_secs);
    let store = ctx.store()?;

    PlannerTui::new(store, alert_timeout).run()
}
