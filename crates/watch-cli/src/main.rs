//! watchlist CLI
//!
//! Inspect the pipeline table and resolve selections the way the sync
//! agent does at startup.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} failed to initialise logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} pipeline selection resolver", "watchlist".green().bold());
            println!();
            println!("Run {} for available commands.", "watchlist --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::ListPipelines { scope } => commands::run_list_pipelines(scope),
        Commands::Resolve { config, json } => commands::run_resolve(config.as_deref(), json),
        Commands::Announce { config } => commands::run_announce(config.as_deref()),
    }
}
