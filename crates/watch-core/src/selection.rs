//! User-supplied pipeline selection
//!
//! A [`Selection`] names pipelines in one of two mutually exclusive ways:
//!
//! - **allow-list** - only the listed resources are enabled, each with its
//!   own event set
//! - **deny-list** - every known resource except the listed ones is
//!   enabled, with the registry's default events
//!
//! Names that match nothing in the registry are ignored in both forms.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A resource enabled by an allow-list, with the events to emit for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowEntry {
    /// Pipeline name to enable (e.g., "pods.v1.")
    pub resource: String,
    /// Events emitted for this resource; passed through verbatim
    #[serde(default)]
    pub events: Vec<String>,
}

impl AllowEntry {
    pub fn new<I, S>(resource: impl Into<String>, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resource: resource.into(),
            events: events.into_iter().map(Into::into).collect(),
        }
    }
}

/// Raw pipeline selection as supplied by the user.
///
/// Exactly one of `deny_list` and `allow_list` must be non-empty; this is
/// checked by [`Selection::mode`], not on construction, so that a source can
/// hand over whatever it received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Resource names to exclude
    #[serde(default, rename = "deny", skip_serializing_if = "Vec::is_empty")]
    pub deny_list: Vec<String>,

    /// Resources to include, in the order given
    #[serde(default, rename = "allow", skip_serializing_if = "Vec::is_empty")]
    pub allow_list: Vec<AllowEntry>,
}

/// A validated view of a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode<'a> {
    Allow(&'a [AllowEntry]),
    Deny(&'a [String]),
}

impl Selection {
    /// Selection that enables only the given resources.
    pub fn allow(entries: impl IntoIterator<Item = AllowEntry>) -> Self {
        Self {
            deny_list: Vec::new(),
            allow_list: entries.into_iter().collect(),
        }
    }

    /// Selection that enables every known resource except the given names.
    pub fn deny<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deny_list: names.into_iter().map(Into::into).collect(),
            allow_list: Vec::new(),
        }
    }

    /// Check that exactly one list is populated and return it.
    pub fn mode(&self) -> Result<SelectionMode<'_>, ValidationError> {
        match (self.allow_list.is_empty(), self.deny_list.is_empty()) {
            (true, true) => Err(ValidationError::MissingSelection),
            (false, false) => Err(ValidationError::ConflictingSelection),
            (false, true) => Ok(SelectionMode::Allow(&self.allow_list)),
            (true, false) => Ok(SelectionMode::Deny(&self.deny_list)),
        }
    }

    /// First allow-list entry for `resource`, if any.
    pub fn allow_entry(&self, resource: &str) -> Option<&AllowEntry> {
        self.allow_list.iter().find(|e| e.resource == resource)
    }

    /// Check if `resource` is on the deny-list.
    pub fn denies(&self, resource: &str) -> bool {
        self.deny_list.iter().any(|d| d == resource)
    }
}
