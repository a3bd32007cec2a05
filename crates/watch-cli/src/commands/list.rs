//! List command for built-in pipelines

use colored::Colorize;
use watch_registry::{PipelineRegistry, Scope};

use crate::error::Result;

fn scope_label(scope: Scope) -> &'static str {
    match scope {
        Scope::Global => "Global (cluster-scoped)",
        Scope::Local => "Local (namespace-scoped)",
    }
}

/// Run the list-pipelines command
pub fn run_list_pipelines(scope_filter: Option<Scope>) -> Result<()> {
    let registry = PipelineRegistry::builtin();

    println!("{}", "Available Pipelines".bold());
    println!();

    let mut shown = 0;
    for scope in Scope::ALL {
        if scope_filter.is_some_and(|f| f != scope) {
            continue;
        }

        let defs = registry.definitions_for_scope(scope);
        if defs.is_empty() {
            continue;
        }

        println!("{}:", scope_label(scope).cyan().bold());
        for def in defs {
            println!(
                "  {:<66} {}",
                def.name.green(),
                def.default_events.join(", ").dimmed()
            );
        }
        println!();
        shown += defs.len();
    }

    println!(
        "{} {} pipelines. Use {} to see what a selection enables.",
        "Total:".dimmed(),
        shown,
        "watchlist resolve".cyan()
    );

    Ok(())
}
