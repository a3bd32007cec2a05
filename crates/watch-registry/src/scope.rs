//! Pipeline scopes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Partition of the pipeline table.
///
/// The derived ordering (`Global` before `Local`) is the order in which
/// scopes are resolved and reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Cluster-scoped resource kinds.
    Global,
    /// Namespace-scoped resource kinds.
    Local,
}

impl Scope {
    /// All scopes, in resolution order.
    pub const ALL: [Scope; 2] = [Scope::Global, Scope::Local];

    /// Stable identifier used in configuration and output keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Local => "local",
        }
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "global" => Ok(Scope::Global),
            "local" => Ok(Scope::Local),
            _ => Err(Error::InvalidScope {
                scope: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
