//! Core types for the pipeline registry

use serde::{Deserialize, Serialize};

use crate::builtins::{DEFAULT_EVENTS, DEFAULT_SUBJECT};

/// A known resource kind and the events its pipeline emits by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDefinition {
    /// Resource identifier (e.g., "pods.v1.", "deployments.v1.apps")
    pub name: String,
    /// Subject resolved events are published on
    pub publish_to: String,
    /// Events emitted when the pipeline is enabled without an override
    pub default_events: Vec<String>,
}

impl PipelineDefinition {
    /// Create a definition publishing to the default subject with the
    /// default event set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            publish_to: DEFAULT_SUBJECT.to_string(),
            default_events: DEFAULT_EVENTS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replace the default event set (builder pattern).
    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_events = events.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the publish subject (builder pattern).
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.publish_to = subject.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_uses_defaults() {
        let def = PipelineDefinition::new("pods.v1.");
        assert_eq!(def.name, "pods.v1.");
        assert_eq!(def.publish_to, DEFAULT_SUBJECT);
        assert_eq!(def.default_events, vec!["ADDED", "MODIFIED", "DELETED"]);
    }

    #[test]
    fn builders_override_fields() {
        let def = PipelineDefinition::new("Pod")
            .with_events(["ADD", "DELETE"])
            .with_subject("custom.subject");
        assert_eq!(def.default_events, vec!["ADD", "DELETE"]);
        assert_eq!(def.publish_to, "custom.subject");
    }
}
