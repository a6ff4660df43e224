use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "weekplan", version, about = "Weekly time-block scheduler")]
struct Cli {
    /// Config file (default: ~/.config/weekplan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive planning menu (default)
    Menu,
    /// Plan a week from a TOML plan file
    Plan(commands::plan::PlanArgs),
    /// Daily summary of a saved schedule
    Summary(commands::summary::SummaryArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    // Logs go to stderr; stdout carries the schedule output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("WEEKPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli.config;
    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run(config_path.as_deref()),
        Commands::Plan(args) => commands::plan::run(args, config_path.as_deref()),
        Commands::Summary(args) => commands::summary::run(args, config_path.as_deref()),
        Commands::Config { action } => commands::config::run(action, config_path.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
