//! Two-phase run: collect every eligible kind, then scan the collected objects

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use kubefind_k8s::{KubeClient, KubeProvider, ResourceProvider};
use kubefind_search::{Collector, Matcher, ReportSink, ScanSummary, TracingSink};

use crate::config::Settings;

pub struct Application<P> {
    settings: Settings,
    matcher: Matcher,
    provider: P,
}

impl Application<KubeProvider> {
    /// Compile patterns, then connect to the cluster named by the settings
    pub async fn connect(settings: Settings) -> Result<Self> {
        let matcher = Matcher::new(settings.search_config()?);

        let kube_client = KubeClient::from_path(&settings.kubeconfig)?;
        let client = kube_client
            .client_for_context(settings.context.as_deref())
            .await?;

        Ok(Self::new(settings, matcher, KubeProvider::new(client)))
    }
}

impl<P: ResourceProvider> Application<P> {
    pub fn new(settings: Settings, matcher: Matcher, provider: P) -> Self {
        Self {
            settings,
            matcher,
            provider,
        }
    }

    /// Collect and scan, logging every match
    pub async fn run(&self, cancel: &CancellationToken) -> Result<ScanSummary> {
        self.run_with_sink(cancel, &mut TracingSink).await
    }

    /// Collect and scan, sending matches to `sink`. Nothing is scanned if
    /// collection fails.
    pub async fn run_with_sink<S: ReportSink>(
        &self,
        cancel: &CancellationToken,
        sink: &mut S,
    ) -> Result<ScanSummary> {
        let selector = self.settings.selector();
        debug!(kinds = ?selector.eligible_kinds(), "Collecting");

        let store = Collector::new(&self.provider, &selector)
            .with_namespace(self.settings.namespace.as_deref())
            .with_format(self.settings.format)
            .collect(cancel)
            .await?;

        let summary = self.matcher.scan(&store, sink);

        debug!(
            scanned = summary.scanned,
            ignored = summary.ignored,
            matched_objects = summary.matched_objects,
            matches = summary.matches,
            "Scan finished"
        );

        Ok(summary)
    }
}
