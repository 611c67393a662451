use super::args::{hints, Cli, Commands};
use super::handlers;
use crate::config;
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir);

    let Some(command) = cli.command else {
        return show_guidance(&ctx);
    };

    match command {
        Commands::Init => handlers::init::handle(&ctx),

        Commands::Add {
            title,
            description,
            date,
        } => handlers::add::handle(&ctx, title, description, date, cli.format),

        Commands::List => handlers::list::handle(&ctx, cli.format),

        Commands::Done { id } => handlers::done::handle(&ctx, id, cli.format),

        Commands::Remove { id } => handlers::remove::handle(&ctx, id, cli.format),

        Commands::Tui => handlers::tui::handle(&ctx),
    }
}

fn show_guidance(ctx: &ExecutionContext) -> Result<()> {
    let initialized = ctx.data_dir().join("config.toml").exists();

    println!("plandeck - Terminal to-do planner\n");

    if !initialized {
        println!("Get started:");
        println!("  {}\n", hints::cmd::INIT);
        println!("The init command will:");
        println!("  1. Create the data directory and config");
        println!("  2. Create an empty task document");
        println!("  3. Show your current tasks\n");
    } else {
        println!("Quick commands:");
        println!("  {:<34} # View all tasks", hints::cmd::LIST);
        println!("  {:<34} # Open the interactive planner", hints::cmd::TUI);
        println!("  plandeck add --title <TITLE> ...   # Add a task");
        println!("  plandeck done <id>                 # Toggle a task");
        println!("  plandeck remove <id>               # Delete a task\n");
    }

    println!("For more commands:");
    println!("  plandeck --help");

    Ok(())
}
