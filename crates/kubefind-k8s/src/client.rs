use std::path::Path;

use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::debug;

/// Kubernetes client wrapper around a single kubeconfig file
pub struct KubeClient {
    kubeconfig: Kubeconfig,
    current_context: Option<String>,
}

impl KubeClient {
    /// Load the kubeconfig at the given path
    pub fn from_path(path: &Path) -> Result<Self> {
        let kubeconfig = Kubeconfig::read_from(path)
            .with_context(|| format!("Failed to read kubeconfig {}", path.display()))?;

        let current_context = kubeconfig.current_context.clone();

        Ok(Self {
            kubeconfig,
            current_context,
        })
    }

    /// Names of all contexts defined in the kubeconfig
    pub fn context_names(&self) -> Vec<&str> {
        self.kubeconfig
            .contexts
            .iter()
            .map(|ctx| ctx.name.as_str())
            .collect()
    }

    /// Get the current context name
    pub fn current_context(&self) -> Option<&str> {
        self.current_context.as_deref()
    }

    /// Create a kube::Client for the given context, or the current one
    pub async fn client_for_context(&self, context_name: Option<&str>) -> Result<kube::Client> {
        if let Some(name) = context_name
            && !self.context_names().contains(&name)
        {
            anyhow::bail!("Context '{}' not found in kubeconfig", name);
        }

        let effective = context_name.or(self.current_context());
        debug!(context = effective.unwrap_or("<none>"), "Connecting to cluster");

        let config = kube::Config::from_custom_kubeconfig(
            self.kubeconfig.clone(),
            &KubeConfigOptions {
                context: context_name.map(str::to_string),
                ..Default::default()
            },
        )
        .await
        .with_context(|| {
            format!(
                "Failed to create config for context: {}",
                effective.unwrap_or("<current>")
            )
        })?;

        kube::Client::try_from(config).with_context(|| {
            format!(
                "Failed to create client for context: {}",
                effective.unwrap_or("<current>")
            )
        })
    }
}
