mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toolscope", about = "Tool-changer alignment camera tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grab one annotated alignment snapshot
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Sample focus scores from repeated grabs
    Focus(commands::focus::FocusArgs),
    /// Print or save the default settings
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Snapshot(args) => commands::snapshot::run(args),
        Commands::Focus(args) => commands::focus::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
