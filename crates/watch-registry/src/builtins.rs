//! Built-in pipeline table - SINGLE SOURCE OF TRUTH
//!
//! Every resource kind the agent can observe is listed here exactly once.
//! Listing, lookup and resolution all derive from [`builtin_definitions`].

use crate::{PipelineDefinition, Scope};

/// Events emitted by a pipeline that was not given an explicit event set.
pub const DEFAULT_EVENTS: &[&str] = &["ADDED", "MODIFIED", "DELETED"];

/// Subject every built-in pipeline publishes on.
pub const DEFAULT_SUBJECT: &str = "meshery.meshsync.core";

/// Number of cluster-scoped built-in pipelines.
pub const GLOBAL_COUNT: usize = 14;

/// Number of namespace-scoped built-in pipelines.
pub const LOCAL_COUNT: usize = 20;

const GLOBAL_RESOURCES: [&str; GLOBAL_COUNT] = [
    "namespaces.v1.",
    "nodes.v1.",
    "persistentvolumes.v1.",
    "storageclasses.v1.storage.k8s.io",
    "volumeattachments.v1.storage.k8s.io",
    "clusterroles.v1.rbac.authorization.k8s.io",
    "clusterrolebindings.v1.rbac.authorization.k8s.io",
    "customresourcedefinitions.v1.apiextensions.k8s.io",
    "apiservices.v1.apiregistration.k8s.io",
    "mutatingwebhookconfigurations.v1.admissionregistration.k8s.io",
    "validatingwebhookconfigurations.v1.admissionregistration.k8s.io",
    "ingressclasses.v1.networking.k8s.io",
    "priorityclasses.v1.scheduling.k8s.io",
    "runtimeclasses.v1.node.k8s.io",
];

const LOCAL_RESOURCES: [&str; LOCAL_COUNT] = [
    "pods.v1.",
    "services.v1.",
    "configmaps.v1.",
    "secrets.v1.",
    "serviceaccounts.v1.",
    "endpoints.v1.",
    "persistentvolumeclaims.v1.",
    "replicationcontrollers.v1.",
    "resourcequotas.v1.",
    "limitranges.v1.",
    "deployments.v1.apps",
    "replicasets.v1.apps",
    "statefulsets.v1.apps",
    "daemonsets.v1.apps",
    "jobs.v1.batch",
    "cronjobs.v1.batch",
    "ingresses.v1.networking.k8s.io",
    "endpointslices.v1.discovery.k8s.io",
    "roles.v1.rbac.authorization.k8s.io",
    "rolebindings.v1.rbac.authorization.k8s.io",
];

/// Returns every built-in pipeline, tagged with its scope, in table order.
///
/// Global definitions come first, each scope in the order listed above.
pub fn builtin_definitions() -> Vec<(Scope, PipelineDefinition)> {
    let global = GLOBAL_RESOURCES
        .iter()
        .map(|name| (Scope::Global, PipelineDefinition::new(*name)));
    let local = LOCAL_RESOURCES
        .iter()
        .map(|name| (Scope::Local, PipelineDefinition::new(*name)));
    global.chain(local).collect()
}
