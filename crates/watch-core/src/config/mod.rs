//! Pipeline resolution and agent settings
//!
//! - [`ConfigResolver`] merges a selection against the pipeline registry
//! - [`Settings`] holds the process-wide constants loaded at startup

mod resolver;
mod settings;

pub use resolver::{ConfigResolver, ResolvedConfig, ResolvedPipeline, resolve};
pub use settings::{AgentSection, EventsSection, Settings};
