//! Error types for watch-core

use std::path::PathBuf;

/// Result type for watch-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a selection cannot be resolved.
///
/// Both variants are deterministic: resolving the same selection again
/// yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Neither an allow-list nor a deny-list was supplied
    #[error("Both allow-listed and deny-listed resources are missing")]
    MissingSelection,

    /// Both an allow-list and a deny-list were supplied
    #[error("Supplying both allow-listed and deny-listed resources is not supported")]
    ConflictingSelection,
}

/// Errors that can occur in watch-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The selection failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Settings file could not be read
    #[error("Failed to read settings at {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by a selection source or version announcer
    #[error(transparent)]
    External(Box<dyn std::error::Error + Send + Sync>),

    // Transparent wrappers for underlying crate errors
    /// Registry error from watch-registry
    #[error(transparent)]
    Registry(#[from] watch_registry::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Wrap a collaborator failure without altering it.
    pub fn external(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::External(err.into())
    }

    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(v) => Some(*v),
            _ => None,
        }
    }
}
