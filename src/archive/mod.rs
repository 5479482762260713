//! Passive archive sources.
//!
//! Every source runs several independent query strategies (Wayback CDX
//! variants, one query per Common Crawl index). A strategy either returns a
//! list of URLs or fails with a reason; failures never cross into sibling
//! strategies.
//!
//! ```text
//! domain → [strategy, strategy, ...] → seen-set → SourceReport
//! ```

pub mod common_crawl;
pub mod wayback;

pub use common_crawl::CommonCrawlClient;
pub use wayback::WaybackClient;

use std::collections::HashSet;

use async_trait::async_trait;

/// Outcome of a single query strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutcome {
    Fetched { strategy: String, urls: usize },
    Failed { strategy: String, reason: String },
}

impl StrategyOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, StrategyOutcome::Failed { .. })
    }

    pub fn strategy(&self) -> &str {
        match self {
            StrategyOutcome::Fetched { strategy, .. } | StrategyOutcome::Failed { strategy, .. } => {
                strategy
            }
        }
    }
}

/// Everything one source produced for one domain.
#[derive(Debug, Clone, Default)]
pub struct SourceReport {
    /// URLs carrying a query string, deduplicated within this call
    pub urls: Vec<String>,
    pub outcomes: Vec<StrategyOutcome>,
}

impl SourceReport {
    /// True when at least one strategy ran and all of them failed.
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(StrategyOutcome::is_failure)
    }
}

#[async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Short name used in progress lines
    fn name(&self) -> &str;

    async fn query(&self, domain: &str) -> SourceReport;
}

/// Order-preserving, per-call URL collector.
///
/// Only URLs carrying a `?` are kept; each URL is kept once.
#[derive(Debug, Default)]
pub(crate) struct UrlCollector {
    seen: HashSet<String>,
    urls: Vec<String>,
}

impl UrlCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the URL was newly added.
    pub fn offer(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() || !url.contains('?') || self.seen.contains(url) {
            return false;
        }
        self.seen.insert(url.to_string());
        self.urls.push(url.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }
}
