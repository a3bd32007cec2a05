//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use watch_registry::Scope;

/// watchlist - Inspect which resource pipelines the sync agent will run
#[derive(Parser, Debug)]
#[command(name = "watchlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the built-in pipelines
    ListPipelines {
        /// Only show one scope (global or local)
        #[arg(short, long)]
        scope: Option<Scope>,
    },

    /// Resolve a selection into the pipelines to run
    ///
    /// Without --config the built-in local default allow-list is used.
    ///
    /// Examples:
    ///   watchlist resolve                        # Local default selection
    ///   watchlist resolve -c watchlist.toml      # Selection from a settings file
    ///   watchlist resolve -c watchlist.toml --json
    Resolve {
        /// Settings file containing a [selection] table
        #[arg(short, long, env = "WATCHLIST_CONFIG")]
        config: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the version patch that would be sent to the custom resource
    Announce {
        /// Settings file providing [agent] and [resource]
        #[arg(short, long, env = "WATCHLIST_CONFIG")]
        config: Option<PathBuf>,
    },
}
