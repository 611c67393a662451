mod commands;
pub mod hints;

pub use commands::*;

use crate::types::OutputFormat;
use clap::Parser;

#[derive(Parser)]
#[command(name = "plandeck")]
#[command(about = "Plan and track day-to-day tasks from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: platform data dir, or PLANDECK_PATH)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
