//! Announce command (dry run)

use std::path::Path;

use watch_core::{PrintAnnouncer, announce_version};

use super::load_settings;
use crate::error::Result;

/// Print the version merge patch for the configured resource
pub fn run_announce(config_path: Option<&Path>) -> Result<()> {
    let settings = load_settings(config_path)?;
    let announcer = PrintAnnouncer::new(std::io::stdout());
    announce_version(&announcer, &settings)?;
    Ok(())
}
