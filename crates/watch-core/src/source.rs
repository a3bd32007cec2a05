//! Selection sources
//!
//! A [`SelectionSource`] supplies the raw [`Selection`] to resolve. The
//! production source reads it from a remote custom resource; this module
//! provides the in-process ones and the glue that runs a source through the
//! resolver.

use watch_registry::{DEFAULT_EVENTS, PipelineRegistry};

use crate::config::{ConfigResolver, ResolvedConfig, Settings};
use crate::error::Result;
use crate::selection::{AllowEntry, Selection};

/// Supplies a selection to resolve.
///
/// Failures should be reported as [`Error::External`](crate::Error::External)
/// so they reach the caller unchanged.
pub trait SelectionSource {
    fn fetch(&self) -> Result<Selection>;
}

impl<F> SelectionSource for F
where
    F: Fn() -> Result<Selection>,
{
    fn fetch(&self) -> Result<Selection> {
        self()
    }
}

/// Settings files may carry a selection of their own.
impl SelectionSource for Settings {
    fn fetch(&self) -> Result<Selection> {
        Ok(self.selection.clone())
    }
}

/// A fixed, in-memory selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource(pub Selection);

impl SelectionSource for StaticSource {
    fn fetch(&self) -> Result<Selection> {
        Ok(self.0.clone())
    }
}

/// Resources watched when the agent runs without a remote configuration.
const LOCAL_DEFAULT_RESOURCES: &[&str] = &[
    "namespaces.v1.",
    "nodes.v1.",
    "pods.v1.",
    "services.v1.",
    "configmaps.v1.",
    "deployments.v1.apps",
    "statefulsets.v1.apps",
    "daemonsets.v1.apps",
];

/// Built-in allow-list used when no remote configuration is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDefaultSource;

impl LocalDefaultSource {
    pub fn selection() -> Selection {
        Selection::allow(
            LOCAL_DEFAULT_RESOURCES
                .iter()
                .map(|r| AllowEntry::new(*r, DEFAULT_EVENTS.iter().copied())),
        )
    }
}

impl SelectionSource for LocalDefaultSource {
    fn fetch(&self) -> Result<Selection> {
        Ok(Self::selection())
    }
}

/// Fetch a selection from `source` and resolve it against `registry`.
///
/// Source failures are returned as-is; validation failures surface as
/// [`Error::Validation`](crate::Error::Validation).
pub fn load_config(
    source: &impl SelectionSource,
    registry: &PipelineRegistry,
) -> Result<ResolvedConfig> {
    let selection = source.fetch()?;
    let config = ConfigResolver::new(registry).resolve(&selection)?;
    Ok(config)
}
