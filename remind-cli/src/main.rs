mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use remind_core::{RemindConfig, Store};

#[derive(Parser)]
#[command(name = "remind", version)]
#[command(about = "Remind me because I forget")]
struct Cli {
    /// Show information messages
    #[arg(long, global = true)]
    info: bool,

    /// Show debug and information messages
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary of immediate reminders
    Summary,
    /// List events
    #[command(alias = "ls")]
    List,
    /// Add a new event
    #[command(alias = "add")]
    Create {
        /// Start date (e.g. "15 Jan 2024", "Jan 2024", "2024-01-15")
        #[arg(short, long)]
        start: Option<String>,

        /// Repeat interval (e.g. "monthly", "annually", "3 months")
        #[arg(short, long)]
        interval: Option<String>,

        /// Maximum number of occurrences
        #[arg(short, long)]
        limit: Option<u32>,

        /// Event description
        description: Option<String>,
    },
    /// Remove an event
    #[command(alias = "rm")]
    Remove {
        /// Event id as shown by `list`
        id: usize,
    },
    /// Open the event file with the default editor
    Edit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);

    let config = RemindConfig::load()?;
    let mut store = Store::open(&config)?;

    match cli.command {
        None | Some(Commands::Summary) => commands::summary::run(&store),
        Some(Commands::List) => commands::list::run(&store),
        Some(Commands::Create {
            start,
            interval,
            limit,
            description,
        }) => commands::create::run(&mut store, start, interval, limit, description),
        Some(Commands::Remove { id }) => commands::remove::run(&mut store, id),
        Some(Commands::Edit) => commands::edit::run(&store),
    }
}

fn init_tracing(cli: &Cli) {
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.info {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}
