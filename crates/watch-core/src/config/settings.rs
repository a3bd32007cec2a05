//! Agent settings parsed from a TOML file
//!
//! Settings carry the process-wide constants the resolver and the version
//! announcer need, plus an optional local selection:
//!
//! ```toml
//! [agent]
//! version = "v0.7.2"
//!
//! [resource]
//! namespace = "meshery"
//! name = "meshery-meshsync"
//!
//! [events]
//! default = ["ADDED", "MODIFIED", "DELETED"]
//!
//! [selection]
//! deny = ["secrets.v1."]
//! ```
//!
//! Every section is optional and falls back to the built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use watch_registry::{DEFAULT_EVENTS, PipelineRegistry};

use crate::announce::ResourceRef;
use crate::error::{Error, Result};
use crate::selection::Selection;

fn default_version() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

fn default_events() -> Vec<String> {
    DEFAULT_EVENTS.iter().map(|e| e.to_string()).collect()
}

/// `[agent]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSection {
    /// Version announced to the remote resource
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            version: default_version(),
        }
    }
}

/// `[events]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsSection {
    /// Events applied to every pipeline enabled through a deny-list
    #[serde(default = "default_events")]
    pub default: Vec<String>,
}

impl Default for EventsSection {
    fn default() -> Self {
        Self {
            default: default_events(),
        }
    }
}

/// Agent settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub agent: AgentSection,

    /// Remote resource holding the selection and receiving the version
    #[serde(default)]
    pub resource: ResourceRef,

    #[serde(default)]
    pub events: EventsSection,

    /// Selection to resolve when no remote resource is consulted
    #[serde(default)]
    pub selection: Selection,
}

impl Settings {
    /// Parse settings from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use watch_core::Settings;
    ///
    /// let settings = Settings::parse(r#"
    /// [selection]
    /// deny = ["secrets.v1."]
    /// "#).unwrap();
    ///
    /// assert_eq!(settings.selection.deny_list, vec!["secrets.v1."]);
    /// assert_eq!(settings.resource.namespace, "meshery");
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }

    /// Read and parse a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "Loading settings");
        let content = fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Built-in registry using the configured default events.
    pub fn registry(&self) -> PipelineRegistry {
        PipelineRegistry::builtin_with_events(&self.events.default)
    }
}
