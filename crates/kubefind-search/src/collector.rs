use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::info;

use kubefind_k8s::ResourceProvider;
use kubefind_types::{KubernetesObject, ResourceKind, TextFormat};

use crate::selector::ResourceSelector;
use crate::store::ObjectStore;

/// Fetches every eligible kind from a provider into an object store
pub struct Collector<'a, P> {
    provider: &'a P,
    selector: &'a ResourceSelector,

    /// Namespace to list in (`None` = all namespaces)
    namespace: Option<&'a str>,

    format: TextFormat,
}

impl<'a, P: ResourceProvider> Collector<'a, P> {
    pub fn new(provider: &'a P, selector: &'a ResourceSelector) -> Self {
        Self {
            provider,
            selector,
            namespace: None,
            format: TextFormat::default(),
        }
    }

    /// Restrict listing to a namespace
    pub fn with_namespace(mut self, namespace: Option<&'a str>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Set how objects are rendered to text
    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    /// Collect all eligible kinds into a fresh store
    pub async fn collect(&self, cancel: &CancellationToken) -> Result<ObjectStore> {
        let mut store = ObjectStore::new();
        self.collect_into(&mut store, cancel).await?;
        Ok(store)
    }

    /// Collect all eligible kinds in order, stopping at the first failure.
    /// Objects appended before the failure stay in the store.
    pub async fn collect_into(
        &self,
        store: &mut ObjectStore,
        cancel: &CancellationToken,
    ) -> Result<()> {
        for kind in ResourceKind::ALL {
            self.collect_kind(kind, store, cancel).await?;
        }
        Ok(())
    }

    /// Collect one kind; a no-op when the selector rejects it
    pub async fn collect_kind(
        &self,
        kind: ResourceKind,
        store: &mut ObjectStore,
        cancel: &CancellationToken,
    ) -> Result<()> {
        if !self.selector.is_eligible(kind) {
            return Ok(());
        }

        info!("Getting {} ...", kind);

        let objects = self
            .provider
            .list_objects(kind, self.namespace, cancel)
            .await
            .with_context(|| format!("error in {}", kind))?;

        for object in objects {
            let text = object
                .render(self.format)
                .with_context(|| format!("error in {}", kind))?;

            store.push(KubernetesObject::new(
                kind,
                object.name(),
                object.namespace(),
                text,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubefind_k8s::{RawObject, RawObjects};
    use std::sync::Mutex;

    struct FakeObject {
        name: String,
        namespace: String,
        text: String,
    }

    impl RawObject for FakeObject {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn namespace(&self) -> String {
            self.namespace.clone()
        }

        fn render(&self, format: TextFormat) -> Result<String> {
            Ok(match format {
                TextFormat::Debug => self.text.clone(),
                TextFormat::Json => format!("{{\"text\":\"{}\"}}", self.text),
            })
        }
    }

    /// Serves two objects per kind and records every call
    #[derive(Default)]
    struct FakeProvider {
        failing: Option<ResourceKind>,
        calls: Mutex<Vec<(ResourceKind, Option<String>)>>,
    }

    impl FakeProvider {
        fn failing_on(kind: ResourceKind) -> Self {
            Self {
                failing: Some(kind),
                ..Default::default()
            }
        }

        fn called_kinds(&self) -> Vec<ResourceKind> {
            self.calls.lock().unwrap().iter().map(|(k, _)| *k).collect()
        }
    }

    impl ResourceProvider for FakeProvider {
        async fn list_objects(
            &self,
            kind: ResourceKind,
            namespace: Option<&str>,
            cancel: &CancellationToken,
        ) -> Result<RawObjects> {
            self.calls
                .lock()
                .unwrap()
                .push((kind, namespace.map(str::to_string)));

            if cancel.is_cancelled() {
                anyhow::bail!("cancelled while listing {}", kind);
            }
            if self.failing == Some(kind) {
                anyhow::bail!("forbidden");
            }

            let ns = namespace.unwrap_or("default");
            Ok(["first", "second"]
                .into_iter()
                .enumerate()
                .map(|(i, suffix)| {
                    Box::new(FakeObject {
                        name: format!("{}-{}", kind.as_str().to_lowercase(), suffix),
                        namespace: ns.to_string(),
                        text: format!("{} object {}", kind, i),
                    }) as Box<dyn RawObject>
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_only_eligible_kinds_are_fetched() {
        let provider = FakeProvider::default();
        let selector = ResourceSelector::new("pods,cronjobs");
        let store = Collector::new(&provider, &selector)
            .collect(&CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            provider.called_kinds(),
            vec![ResourceKind::Pods, ResourceKind::CronJobs]
        );
        assert_eq!(store.len(), 4);
        assert!(store.iter().all(|o| o.kind != ResourceKind::Deployments));
    }

    #[tokio::test]
    async fn test_store_is_kind_major() {
        let provider = FakeProvider::default();
        let selector = ResourceSelector::all();
        let store = Collector::new(&provider, &selector)
            .collect(&CancellationToken::new())
            .await
            .unwrap();

        let kinds: Vec<_> = store.iter().map(|o| o.kind).collect();
        let expected: Vec<_> = ResourceKind::ALL
            .into_iter()
            .flat_map(|k| [k, k])
            .collect();
        assert_eq!(kinds, expected);

        let first = store.iter().next().unwrap();
        assert_eq!(first.name, "pods-first");
        assert_eq!(first.namespace, "default");
        assert_eq!(first.text, "Pods object 0");
    }

    #[tokio::test]
    async fn test_namespace_and_format_are_passed_through() {
        let provider = FakeProvider::default();
        let selector = ResourceSelector::new("configmaps");
        let store = Collector::new(&provider, &selector)
            .with_namespace(Some("prod"))
            .with_format(TextFormat::Json)
            .collect(&CancellationToken::new())
            .await
            .unwrap();

        let calls = provider.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![(ResourceKind::ConfigMaps, Some("prod".to_string()))]
        );
        assert!(store.iter().all(|o| o.namespace == "prod"));
        assert!(store.iter().all(|o| o.text.starts_with("{\"text\"")));
    }

    #[tokio::test]
    async fn test_error_stops_collection() {
        let provider = FakeProvider::failing_on(ResourceKind::Deployments);
        let selector = ResourceSelector::all();
        let mut store = ObjectStore::new();

        let err = Collector::new(&provider, &selector)
            .collect_into(&mut store, &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "error in Deployments");
        assert_eq!(format!("{:#}", err), "error in Deployments: forbidden");
        assert_eq!(
            provider.called_kinds(),
            vec![
                ResourceKind::Pods,
                ResourceKind::ConfigMaps,
                ResourceKind::Deployments
            ]
        );
        // Earlier kinds stay collected
        assert_eq!(store.len(), 4);
    }

    #[tokio::test]
    async fn test_cancelled_run_fails() {
        let provider = FakeProvider::default();
        let selector = ResourceSelector::all();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = Collector::new(&provider, &selector)
            .collect(&cancel)
            .await
            .unwrap_err();

        assert_eq!(
            format!("{:#}", err),
            "error in Pods: cancelled while listing Pods"
        );
        assert_eq!(provider.called_kinds(), vec![ResourceKind::Pods]);
    }

    #[tokio::test]
    async fn test_ineligible_kind_is_a_no_op() {
        let provider = FakeProvider::default();
        let selector = ResourceSelector::new("pods");
        let mut store = ObjectStore::new();

        Collector::new(&provider, &selector)
            .collect_kind(ResourceKind::StatefulSets, &mut store, &CancellationToken::new())
            .await
            .unwrap();

        assert!(store.is_empty());
        assert!(provider.called_kinds().is_empty());
    }
}
