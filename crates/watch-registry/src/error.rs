//! Error types for watch-registry

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid scope: {scope} (expected 'global' or 'local')")]
    InvalidScope { scope: String },

    #[error("Duplicate pipeline '{name}' in {scope} scope")]
    DuplicatePipeline { scope: crate::Scope, name: String },
}
