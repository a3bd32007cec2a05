//! Tests for the built-in pipeline registry

use rstest::rstest;
use watch_registry::{DEFAULT_EVENTS, PipelineRegistry, Scope};

#[rstest]
#[case(Scope::Global, "namespaces.v1.")]
#[case(Scope::Global, "nodes.v1.")]
#[case(Scope::Global, "customresourcedefinitions.v1.apiextensions.k8s.io")]
#[case(Scope::Local, "pods.v1.")]
#[case(Scope::Local, "services.v1.")]
#[case(Scope::Local, "deployments.v1.apps")]
fn builtin_kind_lives_in_expected_scope(#[case] scope: Scope, #[case] name: &str) {
    let registry = PipelineRegistry::builtin();
    let def = registry
        .get(scope, name)
        .unwrap_or_else(|| panic!("{name} should be registered in {scope}"));
    assert_eq!(def.default_events, DEFAULT_EVENTS);
}

#[test]
fn builtin_scopes_are_disjoint() {
    let registry = PipelineRegistry::builtin();
    for def in registry.definitions_for_scope(Scope::Global) {
        assert!(
            registry.get(Scope::Local, &def.name).is_none(),
            "{} is registered in both scopes",
            def.name
        );
    }
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = PipelineRegistry::builtin();
    let expected = registry.len();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| registry.iter().count()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
