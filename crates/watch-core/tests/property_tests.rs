use proptest::prelude::*;
use std::collections::HashSet;
use watch_core::{
    AllowEntry, PipelineDefinition, PipelineRegistry, Scope, Selection, resolve,
};

const NAMES: &[&str] = &["Pod", "Service", "Node", "Namespace", "Secret", "Job"];

/// Registry built from a subset of NAMES per scope, in generated order.
fn registry_strategy() -> impl Strategy<Value = PipelineRegistry> {
    let scope_names = || {
        proptest::sample::subsequence(NAMES.to_vec(), 0..=NAMES.len()).prop_shuffle()
    };
    (scope_names(), scope_names()).prop_map(|(global, local)| {
        let defs = global
            .into_iter()
            .map(|n| (Scope::Global, PipelineDefinition::new(n).with_events(["ADD"])))
            .chain(
                local
                    .into_iter()
                    .map(|n| (Scope::Local, PipelineDefinition::new(n).with_events(["DELETE"]))),
            );
        PipelineRegistry::from_definitions(defs).unwrap()
    })
}

/// Names drawn from NAMES plus some that never appear in a registry.
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(NAMES.to_vec()).prop_map(String::from),
        "[a-z]{1,6}".prop_map(|s| format!("unknown-{s}")),
    ]
}

fn allow_strategy() -> impl Strategy<Value = Vec<AllowEntry>> {
    proptest::collection::vec(
        (name_strategy(), proptest::collection::vec("[A-Z]{3,6}", 0..3))
            .prop_map(|(name, events)| AllowEntry::new(name, events)),
        1..8,
    )
}

proptest! {
    #[test]
    fn allow_list_is_sound(registry in registry_strategy(), entries in allow_strategy()) {
        let selection = Selection::allow(entries.clone());
        let config = resolve(&selection, &registry).unwrap();

        for (scope, pipeline) in config.iter() {
            // Every pipeline comes from the first matching allow entry
            let entry = entries.iter().find(|e| e.resource == pipeline.name);
            prop_assert!(entry.is_some());
            prop_assert_eq!(&pipeline.events, &entry.unwrap().events);
            prop_assert!(registry.get(scope, &pipeline.name).is_some());
        }
        for (scope, def) in registry.iter() {
            let allowed = entries.iter().any(|e| e.resource == def.name);
            prop_assert_eq!(config.get(scope, &def.name).is_some(), allowed);
        }
        for list in config.pipelines.values() {
            prop_assert!(!list.is_empty());
        }
    }

    #[test]
    fn deny_list_is_complete(
        registry in registry_strategy(),
        denied in proptest::collection::vec(name_strategy(), 1..6),
    ) {
        let config = resolve(&Selection::deny(denied.clone()), &registry).unwrap();
        let denied_set: HashSet<_> = denied.iter().map(String::as_str).collect();

        for (_, pipeline) in config.iter() {
            prop_assert!(!denied_set.contains(pipeline.name.as_str()));
        }
        for (scope, def) in registry.iter() {
            let hits = config
                .pipelines_for_scope(scope)
                .iter()
                .filter(|p| p.name == def.name)
                .count();
            if denied_set.contains(def.name.as_str()) {
                prop_assert_eq!(hits, 0);
            } else {
                prop_assert_eq!(hits, 1);
                prop_assert_eq!(&config.get(scope, &def.name).unwrap().events, &def.default_events);
            }
        }
    }

    #[test]
    fn resolution_is_idempotent(registry in registry_strategy(), entries in allow_strategy()) {
        let selection = Selection::allow(entries);
        prop_assert_eq!(resolve(&selection, &registry), resolve(&selection, &registry));
    }

    #[test]
    fn output_order_ignores_deny_order(
        registry in registry_strategy(),
        denied in proptest::collection::vec(name_strategy(), 1..6).prop_shuffle(),
    ) {
        let mut reversed = denied.clone();
        reversed.reverse();

        let a = resolve(&Selection::deny(denied), &registry).unwrap();
        let b = resolve(&Selection::deny(reversed), &registry).unwrap();
        prop_assert_eq!(a.pipelines, b.pipelines);
    }

    #[test]
    fn output_order_ignores_allow_order(
        registry in registry_strategy(),
        names in proptest::sample::subsequence(NAMES.to_vec(), 1..=NAMES.len()).prop_shuffle(),
    ) {
        // Distinct names, so reordering cannot change which entry matches first
        let entries: Vec<_> = names.iter().map(|n| AllowEntry::new(*n, [format!("{n}-EVT")])).collect();
        let mut reversed = entries.clone();
        reversed.reverse();

        let a = resolve(&Selection::allow(entries), &registry).unwrap();
        let b = resolve(&Selection::allow(reversed), &registry).unwrap();
        prop_assert_eq!(&a.pipelines, &b.pipelines);

        for scope in Scope::ALL {
            let expected: Vec<_> = registry
                .definitions_for_scope(scope)
                .iter()
                .filter(|d| names.iter().any(|n| *n == d.name))
                .map(|d| d.name.clone())
                .collect();
            let actual: Vec<_> = a.pipelines_for_scope(scope).iter().map(|p| p.name.clone()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
