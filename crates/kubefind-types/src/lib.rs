//! Shared types for kubefind
//!
//! This crate contains data structures used across multiple kubefind crates.

use std::fmt;
use std::str::FromStr;

// ============================================================================
// Resource Kinds
// ============================================================================

/// Resource kinds that can be collected and searched
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pods,
    ConfigMaps,
    Deployments,
    StatefulSets,
    CronJobs,
}

impl ResourceKind {
    /// All kinds in collection order
    pub const ALL: [ResourceKind; 5] = [
        Self::Pods,
        Self::ConfigMaps,
        Self::Deployments,
        Self::StatefulSets,
        Self::CronJobs,
    ];

    /// Display name, also used as the scope token (case-insensitively)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pods => "Pods",
            Self::ConfigMaps => "ConfigMaps",
            Self::Deployments => "Deployments",
            Self::StatefulSets => "StatefulSets",
            Self::CronJobs => "CronJobs",
        }
    }

    /// API group/version/kind the provider lists for this kind
    pub fn api_resource(&self) -> &'static str {
        match self {
            Self::Pods => "v1/Pod",
            Self::ConfigMaps => "v1/ConfigMap",
            Self::Deployments => "apps/v1/Deployment",
            Self::StatefulSets => "apps/v1/StatefulSet",
            Self::CronJobs => "batch/v1/CronJob",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Collected Objects
// ============================================================================

/// A fetched resource in the uniform shape searched by the matcher
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KubernetesObject {
    pub kind: ResourceKind,
    pub name: String,
    pub namespace: String,

    /// Full textual rendering of the raw object
    pub text: String,
}

impl KubernetesObject {
    pub fn new(kind: ResourceKind, name: String, namespace: String, text: String) -> Self {
        Self {
            kind,
            name,
            namespace,
            text,
        }
    }

    /// Key tested against the exclude pattern: `<namespace>/<name>`
    pub fn exclusion_key(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

/// How a raw object is rendered into searchable text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextFormat {
    /// Rust `Debug` representation of the whole object
    #[default]
    Debug,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{}', expected debug or json", other)),
        }
    }
}
