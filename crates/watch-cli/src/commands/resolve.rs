//! Resolve command

use std::path::Path;

use colored::Colorize;
use watch_core::{
    LocalDefaultSource, ResolvedConfig, Scope, SelectionMode, load_config,
};

use super::load_settings;
use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(config_path: Option<&Path>, json: bool) -> Result<()> {
    let settings = load_settings(config_path)?;
    let registry = settings.registry();
    let config = if config_path.is_some() {
        load_config(&settings, &registry)?
    } else {
        tracing::debug!("No settings file given, using the local default selection");
        load_config(&LocalDefaultSource, &registry)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print_human(&config)?;
    }
    Ok(())
}

fn print_human(config: &ResolvedConfig) -> Result<()> {
    let selection = config.selection();
    let summary = match selection.mode()? {
        SelectionMode::Allow(entries) => format!("allow-list, {} entries", entries.len()),
        SelectionMode::Deny(names) => format!("deny-list, {} entries", names.len()),
    };

    println!("{} ({})", "Resolved Pipelines".bold(), summary.dimmed());
    println!();

    if config.is_empty() {
        println!("{}", "No pipelines enabled.".yellow());
        return Ok(());
    }

    for scope in Scope::ALL {
        let pipelines = config.pipelines_for_scope(scope);
        if pipelines.is_empty() {
            continue;
        }
        println!("{}:", scope.as_str().cyan().bold());
        for pipeline in pipelines {
            println!("  {:<66} {}", pipeline.name.green(), pipeline.events.join(", "));
        }
        println!();
    }

    println!("{} {} pipelines enabled.", "Total:".dimmed(), config.len());
    Ok(())
}
