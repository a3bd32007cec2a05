//! Version announcement to the remote custom resource
//!
//! After startup the agent records its version on the custom resource it
//! reads its selection from, using a JSON merge patch of the form
//! `{"spec": {"version": "<version>"}}`. Sending the patch is delegated to
//! a [`VersionAnnouncer`].

use std::cell::RefCell;
use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::Settings;
use crate::error::Result;

/// Coordinates of the custom resource holding the agent's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRef {
    pub namespace: String,
    pub name: String,
    pub group: String,
    pub version: String,
    /// Plural resource name (e.g., "meshsyncs")
    pub resource: String,
}

impl Default for ResourceRef {
    fn default() -> Self {
        Self {
            namespace: "meshery".to_string(),
            name: "meshery-meshsync".to_string(),
            group: "meshery.io".to_string(),
            version: "v1alpha1".to_string(),
            resource: "meshsyncs".to_string(),
        }
    }
}

impl ResourceRef {
    /// `group/version`, as used in a resource's `apiVersion`.
    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}/{} {}/{}",
            self.resource, self.group, self.version, self.namespace, self.name
        )
    }
}

/// Merge patch that records the agent version on the custom resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPatch {
    version: String,
}

impl VersionPatch {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Patch body as a JSON value.
    pub fn to_value(&self) -> Value {
        json!({ "spec": { "version": self.version } })
    }

    /// Patch body serialized for a merge-patch request.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value())?)
    }
}

/// Sends a [`VersionPatch`] to a remote resource.
///
/// Implementations report transport failures as
/// [`Error::External`](crate::Error::External); callers propagate them
/// unchanged.
pub trait VersionAnnouncer {
    fn announce(&self, target: &ResourceRef, patch: &VersionPatch) -> Result<()>;
}

/// Announcer that writes the target and patch to a writer instead of a
/// remote API. Used for dry runs.
pub struct PrintAnnouncer<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> PrintAnnouncer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> VersionAnnouncer for PrintAnnouncer<W> {
    fn announce(&self, target: &ResourceRef, patch: &VersionPatch) -> Result<()> {
        let body = serde_json::to_string_pretty(&patch.to_value())?;
        let mut out = self.out.borrow_mut();
        writeln!(out, "PATCH {target}")?;
        writeln!(out, "{body}")?;
        Ok(())
    }
}

/// Announce the configured agent version to the configured resource.
pub fn announce_version(announcer: &impl VersionAnnouncer, settings: &Settings) -> Result<()> {
    let patch = VersionPatch::new(settings.agent.version.clone());
    tracing::info!(target_resource = %settings.resource, version = patch.version(), "Announcing agent version");
    announcer.announce(&settings.resource, &patch)
}
