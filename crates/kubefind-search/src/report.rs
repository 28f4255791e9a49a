use tracing::{debug, info};

use kubefind_types::{KubernetesObject, ResourceKind};

/// A single match, ready to be shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub kind: ResourceKind,
    pub name: String,
    pub namespace: String,

    /// Original-case text around the match, newlines replaced by spaces
    pub snippet: String,
}

/// Receives scan results
pub trait ReportSink {
    /// Called once per match, in object then offset order
    fn matched(&mut self, report: &Report);

    /// Called once per object skipped by the exclude pattern
    fn ignored(&mut self, object: &KubernetesObject);
}

/// Emits reports as structured log events
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn matched(&mut self, report: &Report) {
        info!(
            kind = %report.kind,
            name = %report.name,
            namespace = %report.namespace,
            "{}",
            report.snippet
        );
    }

    fn ignored(&mut self, object: &KubernetesObject) {
        debug!(
            kind = %object.kind,
            name = %object.name,
            namespace = %object.namespace,
            "ignored"
        );
    }
}
