//! Selection validation and pipeline resolution for the watchlist agent
//!
//! This crate turns a user [`Selection`] (an allow-list *or* a deny-list)
//! and the static [`PipelineRegistry`] into a [`ResolvedConfig`]: the
//! scope-partitioned list of pipelines to run and the events each emits.
//!
//! # Architecture
//!
//! ```text
//!   SelectionSource ──> Selection ──┐
//!                                   ├──> ConfigResolver ──> ResolvedConfig
//!   PipelineRegistry ───────────────┘
//!
//!   Settings ──> VersionPatch ──> VersionAnnouncer
//! ```
//!
//! Fetching the selection and announcing the agent version are left to
//! implementations of [`SelectionSource`] and [`VersionAnnouncer`].
//!
//! # Example
//!
//! ```
//! use watch_core::{AllowEntry, ConfigResolver, Selection};
//! use watch_registry::{PipelineRegistry, Scope};
//!
//! let registry = PipelineRegistry::builtin();
//! let selection = Selection::allow([AllowEntry::new("pods.v1.", ["ADDED"])]);
//!
//! let config = ConfigResolver::new(&registry).resolve(&selection)?;
//! assert_eq!(config.pipelines_for_scope(Scope::Local).len(), 1);
//! assert!(config.pipelines_for_scope(Scope::Global).is_empty());
//! # Ok::<(), watch_core::ValidationError>(())
//! ```

pub mod announce;
pub mod config;
pub mod error;
pub mod selection;
pub mod source;

pub use announce::{PrintAnnouncer, ResourceRef, VersionAnnouncer, VersionPatch, announce_version};
pub use config::{ConfigResolver, ResolvedConfig, ResolvedPipeline, Settings, resolve};
pub use error::{Error, Result, ValidationError};
pub use selection::{AllowEntry, Selection, SelectionMode};
pub use source::{LocalDefaultSource, SelectionSource, StaticSource, load_config};

pub use watch_registry::{PipelineDefinition, PipelineRegistry, Scope};
