use crate::args::hints;
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;

/// Set up the data directory, config, and task document. Idempotent.
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let data_dir = ctx.data_dir();
    std::fs::create_dir_all(data_dir)?;

    let config_path = data_dir.join("config.toml");
    if !config_path.exists() {
        Config::default().save_to(&config_path)?;
        println!("Created {}", config_path.display());
    } else {
        println!("Config found at {}", config_path.display());
    }

    let store = ctx.store()?;
    if !store.path().exists() {
        store.save(&[])?;
        println!("Created {}", store.path().display());
    } else {
        println!("Task document found at {}", store.path().display());
    }

    println!();
    let tasks = store.list()?;
    ConsoleRenderer::new(OutputFormat::Plain).render(presenters::present_task_list(&tasks))?;

    println!();
    println!("Next steps:");
    println!("  {}", hints::cmd::ADD);
    println!("  {}", hints::cmd::TUI);

    Ok(())
}
