//! Command implementations for watch-cli

pub mod announce;
pub mod list;
pub mod resolve;

pub use announce::run_announce;
pub use list::run_list_pipelines;
pub use resolve::run_resolve;

use std::path::Path;

use watch_core::Settings;

use crate::error::{CliError, Result};

/// Load settings from `path`, or fall back to the built-in defaults.
pub(crate) fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) if !path.is_file() => Err(CliError::user(format!(
            "Settings file not found: {}",
            path.display()
        ))),
        Some(path) => Ok(Settings::load(path)?),
        None => Ok(Settings::default()),
    }
}
