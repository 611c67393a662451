use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Set up the data directory, config, and task document")]
    Init,

    #[command(about = "Add a task to the planner")]
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long, help = "Free-form date text (default: today)")]
        date: Option<String>,
    },

    #[command(about = "List all tasks")]
    List,

    #[command(about = "Toggle a task between done and not done")]
    Done {
        #[arg(help = "Task id (as shown by 'plandeck list')")]
        id: String,
    },

    #[command(about = "Delete a task")]
    Remove {
        #[arg(help = "Task id (as shown by 'plandeck list')")]
        id: String,
    },

    #[command(about = "Open the interactive planner")]
    Tui,
}
