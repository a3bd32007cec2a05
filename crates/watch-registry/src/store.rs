//! Pipeline registry storage

use std::collections::{BTreeMap, HashSet};

use crate::builtins::builtin_definitions;
use crate::error::{Error, Result};
use crate::{PipelineDefinition, Scope};

/// Read-only table of pipeline definitions, partitioned by scope.
///
/// Definitions keep the order they were supplied in. The registry has no
/// mutating operations once built, so a single instance can be shared by
/// reference across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineRegistry {
    scopes: BTreeMap<Scope, Vec<PipelineDefinition>>,
}

impl PipelineRegistry {
    /// Create a registry from the built-in table.
    pub fn builtin() -> Self {
        Self::from_trusted(builtin_definitions())
    }

    /// Create a registry from the built-in table with every pipeline's
    /// default events replaced by `events`.
    pub fn builtin_with_events(events: &[String]) -> Self {
        Self::from_trusted(
            builtin_definitions()
                .into_iter()
                .map(|(scope, def)| (scope, def.with_events(events.iter().cloned()))),
        )
    }

    /// Create a registry from arbitrary definitions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePipeline`] if a name appears twice within
    /// the same scope. The same name in different scopes is allowed.
    pub fn from_definitions<I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Scope, PipelineDefinition)>,
    {
        let mut seen: HashSet<(Scope, String)> = HashSet::new();
        let mut scopes: BTreeMap<Scope, Vec<PipelineDefinition>> = BTreeMap::new();

        for (scope, def) in definitions {
            if !seen.insert((scope, def.name.clone())) {
                return Err(Error::DuplicatePipeline {
                    scope,
                    name: def.name,
                });
            }
            scopes.entry(scope).or_default().push(def);
        }

        tracing::debug!(
            global = scopes.get(&Scope::Global).map_or(0, Vec::len),
            local = scopes.get(&Scope::Local).map_or(0, Vec::len),
            "Built pipeline registry"
        );
        Ok(Self { scopes })
    }

    // The built-in table is checked for duplicates by its own tests.
    fn from_trusted<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = (Scope, PipelineDefinition)>,
    {
        let mut scopes: BTreeMap<Scope, Vec<PipelineDefinition>> = BTreeMap::new();
        for (scope, def) in definitions {
            scopes.entry(scope).or_default().push(def);
        }
        Self { scopes }
    }

    /// Definitions for a scope, in registry order. Empty if the scope has none.
    pub fn definitions_for_scope(&self, scope: Scope) -> &[PipelineDefinition] {
        self.scopes.get(&scope).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get a definition by scope and name.
    pub fn get(&self, scope: Scope, name: &str) -> Option<&PipelineDefinition> {
        self.definitions_for_scope(scope)
            .iter()
            .find(|d| d.name == name)
    }

    /// Check if any scope defines a pipeline with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|(_, d)| d.name == name)
    }

    /// Scopes that have at least one definition, in resolution order.
    pub fn scopes(&self) -> impl Iterator<Item = Scope> + '_ {
        self.scopes
            .iter()
            .filter(|(_, defs)| !defs.is_empty())
            .map(|(scope, _)| *scope)
    }

    /// Iterate over all definitions, scope by scope, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Scope, &PipelineDefinition)> {
        self.scopes
            .iter()
            .flat_map(|(scope, defs)| defs.iter().map(move |d| (*scope, d)))
    }

    /// Total number of definitions across all scopes.
    pub fn len(&self) -> usize {
        self.scopes.values().map(Vec::len).sum()
    }

    /// Check if the registry has no definitions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{GLOBAL_COUNT, LOCAL_COUNT};
    use pretty_assertions::assert_eq;

    fn def(name: &str) -> PipelineDefinition {
        PipelineDefinition::new(name)
    }

    #[test]
    fn test_empty_registry() {
        let registry = PipelineRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.definitions_for_scope(Scope::Global).is_empty());
        assert_eq!(registry.scopes().count(), 0);
    }

    #[test]
    fn test_builtin_registry() {
        let registry = PipelineRegistry::builtin();
        assert_eq!(registry.len(), GLOBAL_COUNT + LOCAL_COUNT);
        assert_eq!(
            registry.definitions_for_scope(Scope::Global).len(),
            GLOBAL_COUNT
        );
        assert_eq!(
            registry.definitions_for_scope(Scope::Local).len(),
            LOCAL_COUNT
        );
        assert!(registry.contains("pods.v1."));
        assert!(registry.get(Scope::Local, "pods.v1.").is_some());
        assert!(registry.get(Scope::Global, "pods.v1.").is_none());
    }

    #[test]
    fn test_builtin_with_events() {
        let events = vec!["ADDED".to_string()];
        let registry = PipelineRegistry::builtin_with_events(&events);
        assert_eq!(registry.len(), GLOBAL_COUNT + LOCAL_COUNT);
        assert!(registry.iter().all(|(_, d)| d.default_events == events));
    }

    #[test]
    fn test_preserves_insertion_order() {
        let registry = PipelineRegistry::from_definitions([
            (Scope::Local, def("zeta")),
            (Scope::Global, def("beta")),
            (Scope::Local, def("alpha")),
        ])
        .unwrap();

        let local: Vec<_> = registry
            .definitions_for_scope(Scope::Local)
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(local, vec!["zeta", "alpha"]);

        let all: Vec<_> = registry.iter().map(|(s, d)| (s, d.name.as_str())).collect();
        assert_eq!(
            all,
            vec![
                (Scope::Global, "beta"),
                (Scope::Local, "zeta"),
                (Scope::Local, "alpha"),
            ]
        );
    }

    #[test]
    fn test_same_name_in_both_scopes_is_allowed() {
        let registry = PipelineRegistry::from_definitions([
            (Scope::Global, def("shared")),
            (Scope::Local, def("shared")),
        ])
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.scopes().collect::<Vec<_>>(), Scope::ALL.to_vec());
    }

    #[test]
    fn test_duplicate_within_scope_is_rejected() {
        let err = PipelineRegistry::from_definitions([
            (Scope::Global, def("Pod")),
            (Scope::Global, def("Pod")),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicatePipeline { scope: Scope::Global, ref name } if name == "Pod"
        ));
    }
}
