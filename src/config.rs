//! Command-line settings and their validation

use std::path::PathBuf;

use clap::Parser;

use kubefind_search::{
    ConfigError, DEFAULT_RADIUS, ResourceSelector, SearchConfig, TextFormat, WILDCARD,
};

/// Kubefind - Search Kubernetes resources for a pattern
#[derive(Parser, Debug)]
#[command(name = "kubefind")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the kubeconfig file to use for CLI requests
    #[arg(long, env = "KUBECONFIG", default_value = "")]
    pub kubeconfig: String,

    /// Resource kinds to search: comma-separated list of
    /// pods, configmaps, deployments, statefulsets, cronjobs, or *
    #[arg(long = "where", value_name = "KINDS", default_value = WILDCARD)]
    pub scope: String,

    /// Pattern to search for, matched against lowercased object text
    #[arg(long, value_name = "PATTERN", default_value = "")]
    pub find: String,

    /// Namespace to search (all namespaces when empty)
    #[arg(long, default_value = "")]
    pub namespace: String,

    /// Skip objects whose "<namespace>/<name>" matches this pattern
    #[arg(long, value_name = "PATTERN", default_value = "")]
    pub except: String,

    /// Kubernetes context name (defaults to the current context)
    #[arg(long)]
    pub context: Option<String>,

    /// Characters of context shown around each match
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub radius: usize,

    /// How objects are rendered before searching: debug or json
    #[arg(long, default_value = "debug")]
    pub format: TextFormat,

    /// Also log objects skipped by --except
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Check required settings before anything touches the network
    pub fn validate(self) -> Result<Settings, ConfigError> {
        if self.kubeconfig.is_empty() {
            return Err(ConfigError::Missing("kubeconfig"));
        }

        if self.scope.is_empty() {
            return Err(ConfigError::Missing("where"));
        }

        if self.find.is_empty() {
            return Err(ConfigError::Missing("find"));
        }

        Ok(Settings {
            kubeconfig: PathBuf::from(self.kubeconfig),
            scope: self.scope,
            find: self.find,
            namespace: Some(self.namespace).filter(|ns| !ns.is_empty()),
            except: self.except,
            context: self.context,
            radius: self.radius,
            format: self.format,
        })
    }
}

/// Validated settings for one run
#[derive(Clone, Debug)]
pub struct Settings {
    pub kubeconfig: PathBuf,
    pub scope: String,
    pub find: String,
    pub namespace: Option<String>,
    pub except: String,
    pub context: Option<String>,
    pub radius: usize,
    pub format: TextFormat,
}

impl Settings {
    pub fn selector(&self) -> ResourceSelector {
        ResourceSelector::new(&self.scope)
    }

    /// Compile the search and exclude patterns
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        SearchConfig::new(&self.find, &self.except, self.radius)
    }
}
