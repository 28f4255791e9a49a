use std::fmt::Debug;
use std::future::Future;

use anyhow::Result;
use k8s_openapi::NamespaceResourceScope;
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use k8s_openapi::api::batch::v1::CronJob;
use k8s_openapi::api::core::v1::{ConfigMap, Pod};
use kube::api::ListParams;
use kube::{Api, Resource};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::object::{KubeObject, RawObject};
use kubefind_types::ResourceKind;

/// Objects returned by a single list call, in API order
pub type RawObjects = Vec<Box<dyn RawObject>>;

/// Lists raw cluster objects of one kind
pub trait ResourceProvider {
    /// List every object of `kind`, in `namespace` or across all namespaces when `None`.
    /// Fails if `cancel` fires before the call completes.
    fn list_objects(
        &self,
        kind: ResourceKind,
        namespace: Option<&str>,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<RawObjects>> + Send;
}

/// Provider backed by the Kubernetes API server
#[derive(Clone)]
pub struct KubeProvider {
    client: kube::Client,
}

impl KubeProvider {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    async fn list_kind(&self, kind: ResourceKind, namespace: Option<&str>) -> Result<RawObjects> {
        match kind {
            ResourceKind::Pods => self.list::<Pod>(namespace).await,
            ResourceKind::ConfigMaps => self.list::<ConfigMap>(namespace).await,
            ResourceKind::Deployments => self.list::<Deployment>(namespace).await,
            ResourceKind::StatefulSets => self.list::<StatefulSet>(namespace).await,
            ResourceKind::CronJobs => self.list::<CronJob>(namespace).await,
        }
    }

    async fn list<K>(&self, namespace: Option<&str>) -> Result<RawObjects>
    where
        K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
            + Clone
            + DeserializeOwned
            + Serialize
            + Debug
            + Send
            + Sync
            + 'static,
    {
        let api: Api<K> = match namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };

        let list = api.list(&ListParams::default()).await?;

        Ok(list
            .items
            .into_iter()
            .map(|item| Box::new(KubeObject(item)) as Box<dyn RawObject>)
            .collect())
    }
}

impl ResourceProvider for KubeProvider {
    async fn list_objects(
        &self,
        kind: ResourceKind,
        namespace: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<RawObjects> {
        debug!(
            resource = kind.api_resource(),
            namespace = namespace.unwrap_or("*"),
            "Listing objects"
        );

        tokio::select! {
            _ = cancel.cancelled() => anyhow::bail!("cancelled while listing {}", kind),
            result = self.list_kind(kind, namespace) => result,
        }
    }
}
