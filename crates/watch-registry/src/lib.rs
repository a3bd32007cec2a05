//! Built-in pipeline definitions for the watchlist agent.
//!
//! A pipeline observes one resource kind and publishes its change events.
//! This crate holds the canonical, read-only table of pipelines the agent
//! knows about, partitioned by [`Scope`]:
//!
//! - [`Scope::Global`] - cluster-scoped kinds (namespaces, nodes, CRDs, ...)
//! - [`Scope::Local`] - namespace-scoped kinds (pods, services, ...)
//!
//! # Example
//!
//! ```
//! use watch_registry::{PipelineRegistry, Scope};
//!
//! let registry = PipelineRegistry::builtin();
//! let global = registry.definitions_for_scope(Scope::Global);
//! assert!(global.iter().any(|d| d.name == "namespaces.v1."));
//! ```

pub mod builtins;
pub mod error;
mod scope;
mod store;
mod types;

pub use builtins::{DEFAULT_EVENTS, DEFAULT_SUBJECT, builtin_definitions};
pub use error::{Error, Result};
pub use scope::Scope;
pub use store::PipelineRegistry;
pub use types::PipelineDefinition;
