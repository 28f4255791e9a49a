use std::collections::HashSet;

use kubefind_types::ResourceKind;

/// Scope token that makes every kind eligible
pub const WILDCARD: &str = "*";

/// Decides which resource kinds are collected
#[derive(Clone, Debug)]
pub struct ResourceSelector {
    /// Lowercased scope tokens
    tokens: HashSet<String>,

    /// Whether the wildcard was listed
    all: bool,
}

impl ResourceSelector {
    /// Build from a comma-separated, case-insensitive list of kinds or `*`
    pub fn new(scope: &str) -> Self {
        let tokens: HashSet<String> = scope
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        let all = tokens.contains(WILDCARD);

        Self { tokens, all }
    }

    /// Selector that accepts every kind
    pub fn all() -> Self {
        Self::new(WILDCARD)
    }

    /// Check if a kind should be collected.
    /// Tokens must match a kind name exactly; unknown tokens select nothing.
    pub fn is_eligible(&self, kind: ResourceKind) -> bool {
        self.all || self.tokens.contains(&kind.as_str().to_lowercase())
    }

    /// Eligible kinds in collection order
    pub fn eligible_kinds(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| self.is_eligible(*kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_kinds() {
        let selector = ResourceSelector::new("pods,cronjobs");
        assert_eq!(
            selector.eligible_kinds(),
            vec![ResourceKind::Pods, ResourceKind::CronJobs]
        );
    }

    #[test]
    fn test_case_insensitive() {
        let selector = ResourceSelector::new("ConfigMaps,STATEFULSETS");
        assert!(selector.is_eligible(ResourceKind::ConfigMaps));
        assert!(selector.is_eligible(ResourceKind::StatefulSets));
        assert!(!selector.is_eligible(ResourceKind::Deployments));
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(ResourceSelector::all().eligible_kinds(), ResourceKind::ALL);
        // Wildcard wins over the rest of the list
        let selector = ResourceSelector::new("pods,*");
        assert!(ResourceKind::ALL.iter().all(|k| selector.is_eligible(*k)));
    }

    #[test]
    fn test_no_partial_match() {
        let selector = ResourceSelector::new("pod,deploy,configmap");
        assert!(selector.eligible_kinds().is_empty());
    }

    #[test]
    fn test_unknown_and_blank_tokens() {
        let selector = ResourceSelector::new("services, deployments ,,");
        assert_eq!(selector.eligible_kinds(), vec![ResourceKind::Deployments]);
        assert!(ResourceSelector::new("").eligible_kinds().is_empty());
    }
}
