//! Pipeline resolution
//!
//! The `ConfigResolver` merges a [`Selection`] against the
//! [`PipelineRegistry`] to decide which pipelines run and which events each
//! one emits.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use watch_registry::{PipelineDefinition, PipelineRegistry, Scope};

use crate::error::ValidationError;
use crate::selection::{AllowEntry, Selection, SelectionMode};

/// An enabled pipeline with its effective event set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPipeline {
    /// Resource identifier copied from the registry
    pub name: String,
    /// Subject copied from the registry
    pub publish_to: String,
    /// Events this pipeline emits
    pub events: Vec<String>,
}

impl ResolvedPipeline {
    fn from_definition(def: &PipelineDefinition, events: Vec<String>) -> Self {
        Self {
            name: def.name.clone(),
            publish_to: def.publish_to.clone(),
            events,
        }
    }
}

/// The result of resolving a selection against the registry.
///
/// `pipelines` only holds scopes with at least one enabled pipeline, and
/// each list follows registry order regardless of how the selection was
/// ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// Deny-list the configuration was resolved from
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deny_list: Vec<String>,

    /// Allow-list the configuration was resolved from
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow_list: Vec<AllowEntry>,

    /// Enabled pipelines keyed by scope
    #[serde(default)]
    pub pipelines: BTreeMap<Scope, Vec<ResolvedPipeline>>,
}

impl ResolvedConfig {
    /// Pipelines enabled for a scope, in registry order.
    pub fn pipelines_for_scope(&self, scope: Scope) -> &[ResolvedPipeline] {
        self.pipelines.get(&scope).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find an enabled pipeline by scope and name.
    pub fn get(&self, scope: Scope, name: &str) -> Option<&ResolvedPipeline> {
        self.pipelines_for_scope(scope)
            .iter()
            .find(|p| p.name == name)
    }

    /// Iterate over all enabled pipelines, scope by scope.
    pub fn iter(&self) -> impl Iterator<Item = (Scope, &ResolvedPipeline)> {
        self.pipelines
            .iter()
            .flat_map(|(scope, list)| list.iter().map(move |p| (*scope, p)))
    }

    /// Number of enabled pipelines across all scopes.
    pub fn len(&self) -> usize {
        self.pipelines.values().map(Vec::len).sum()
    }

    /// Check if no pipeline was enabled.
    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// The selection this configuration was resolved from.
    pub fn selection(&self) -> Selection {
        Selection {
            deny_list: self.deny_list.clone(),
            allow_list: self.allow_list.clone(),
        }
    }
}

/// Resolves selections against a borrowed registry.
///
/// Resolution is pure: it never mutates the registry or the selection, and
/// the same inputs always produce the same output.
#[derive(Debug, Clone, Copy)]
pub struct ConfigResolver<'a> {
    registry: &'a PipelineRegistry,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(registry: &'a PipelineRegistry) -> Self {
        Self { registry }
    }

    /// Get the registry this resolver merges against
    pub fn registry(&self) -> &'a PipelineRegistry {
        self.registry
    }

    /// Resolve a selection into the scope-partitioned pipeline set
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingSelection`] if both lists are empty
    /// - [`ValidationError::ConflictingSelection`] if both are populated
    ///
    /// Unknown resource names are not errors; they simply enable nothing.
    pub fn resolve(&self, selection: &Selection) -> Result<ResolvedConfig, ValidationError> {
        let mut pipelines = BTreeMap::new();

        match selection.mode()? {
            SelectionMode::Allow(entries) => {
                tracing::debug!(entries = entries.len(), "Resolving allow-list");
                for entry in entries {
                    if !self.registry.contains(&entry.resource) {
                        tracing::debug!(resource = %entry.resource, "Ignoring unknown allow-list entry");
                    }
                }
                for scope in Scope::ALL {
                    let enabled: Vec<_> = self
                        .registry
                        .definitions_for_scope(scope)
                        .iter()
                        .filter_map(|def| {
                            selection.allow_entry(&def.name).map(|entry| {
                                ResolvedPipeline::from_definition(def, entry.events.clone())
                            })
                        })
                        .collect();
                    insert_non_empty(&mut pipelines, scope, enabled);
                }
            }
            SelectionMode::Deny(names) => {
                tracing::debug!(entries = names.len(), "Resolving deny-list");
                let denied: HashSet<&str> = names.iter().map(String::as_str).collect();
                for scope in Scope::ALL {
                    let enabled: Vec<_> = self
                        .registry
                        .definitions_for_scope(scope)
                        .iter()
                        .filter(|def| !denied.contains(def.name.as_str()))
                        .map(|def| ResolvedPipeline::from_definition(def, def.default_events.clone()))
                        .collect();
                    insert_non_empty(&mut pipelines, scope, enabled);
                }
            }
        }

        let config = ResolvedConfig {
            deny_list: selection.deny_list.clone(),
            allow_list: selection.allow_list.clone(),
            pipelines,
        };
        tracing::info!(
            global = config.pipelines_for_scope(Scope::Global).len(),
            local = config.pipelines_for_scope(Scope::Local).len(),
            "Resolved pipeline configuration"
        );
        Ok(config)
    }
}

/// Resolve `selection` against `registry`.
///
/// Shorthand for `ConfigResolver::new(registry).resolve(selection)`.
pub fn resolve(
    selection: &Selection,
    registry: &PipelineRegistry,
) -> Result<ResolvedConfig, ValidationError> {
    ConfigResolver::new(registry).resolve(selection)
}

fn insert_non_empty(
    pipelines: &mut BTreeMap<Scope, Vec<ResolvedPipeline>>,
    scope: Scope,
    enabled: Vec<ResolvedPipeline>,
) {
    if !enabled.is_empty() {
        pipelines.insert(scope, enabled);
    }
}
