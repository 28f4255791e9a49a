use std::fmt::Debug;

use anyhow::{Context, Result};
use kube::{Resource, ResourceExt};
use serde::Serialize;

use kubefind_types::TextFormat;

/// A listed cluster object before it is converted for searching
pub trait RawObject: Send + Sync {
    fn name(&self) -> String;

    fn namespace(&self) -> String;

    /// Full textual rendering of the object
    fn render(&self, format: TextFormat) -> Result<String>;
}

/// Any typed Kubernetes resource returned by the API
pub struct KubeObject<K>(pub K);

impl<K> RawObject for KubeObject<K>
where
    K: Resource + Debug + Serialize + Send + Sync,
{
    fn name(&self) -> String {
        self.0.name_any()
    }

    fn namespace(&self) -> String {
        self.0.namespace().unwrap_or_default()
    }

    fn render(&self, format: TextFormat) -> Result<String> {
        match format {
            TextFormat::Debug => Ok(format!("{:?}", self.0)),
            TextFormat::Json => serde_json::to_string_pretty(&self.0)
                .with_context(|| format!("Failed to serialize {}", self.0.name_any())),
        }
    }
}
