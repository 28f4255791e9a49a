//! Kubernetes client for kubefind
//!
//! This crate provides connection setup from a kubeconfig file and the
//! resource provider used to list pods, config maps, deployments, stateful
//! sets and cron jobs.

mod client;
mod object;
mod provider;

pub use client::KubeClient;
pub use object::{KubeObject, RawObject};
pub use provider::{KubeProvider, RawObjects, ResourceProvider};

// Re-export types that are used in our public API
pub use kubefind_types::{ResourceKind, TextFormat};
