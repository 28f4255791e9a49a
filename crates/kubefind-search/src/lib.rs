//! Resource collection and pattern scanning for kubefind
//!
//! Collection runs first: the [`ResourceSelector`] decides which kinds the
//! [`Collector`] fetches into the [`ObjectStore`]. Scanning runs once the
//! store is complete: the [`Matcher`] searches every object's text and hands
//! each hit to a [`ReportSink`].

mod collector;
mod config;
mod matcher;
mod report;
mod selector;
mod store;

pub use collector::Collector;
pub use config::{ConfigError, DEFAULT_RADIUS, SearchConfig};
pub use matcher::{Matcher, ScanSummary, Snippet};
pub use report::{Report, ReportSink, TracingSink};
pub use selector::{ResourceSelector, WILDCARD};
pub use store::ObjectStore;

// Re-export types used in our public API
pub use kubefind_types::{KubernetesObject, ResourceKind, TextFormat};
