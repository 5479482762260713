//! Per-domain harvest job.
//!
//! ```text
//! domain → sources → raw URLs → ExtensionFilter → Normalizer → ResultStore
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::{HarvestError, Result};
use crate::archive::ArchiveSource;
use crate::filter::ExtensionFilter;
use crate::normalizer::Normalizer;
use crate::scheduler::DomainProcessor;
use crate::store::ResultStore;

/// What happened to the raw URLs of one domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Normalized and merged into the store
    pub accepted: usize,
    /// Dropped by the extension filter
    pub excluded: usize,
    /// Unparseable or without named parameters
    pub discarded: usize,
}

pub struct HarvestPipeline {
    sources: Vec<Arc<dyn ArchiveSource>>,
    filter: ExtensionFilter,
    normalizer: Normalizer,
    store: Arc<ResultStore>,
}

impl HarvestPipeline {
    pub fn new(
        sources: Vec<Arc<dyn ArchiveSource>>,
        filter: ExtensionFilter,
        normalizer: Normalizer,
        store: Arc<ResultStore>,
    ) -> Self {
        Self {
            sources,
            filter,
            normalizer,
            store,
        }
    }

    pub fn store(&self) -> &Arc<ResultStore> {
        &self.store
    }

    /// Filter, normalize and merge a batch of raw URLs.
    pub fn extract(&self, urls: &[String]) -> ExtractionStats {
        let mut stats = ExtractionStats::default();

        for url in urls {
            if self.filter.is_excluded(url) {
                stats.excluded += 1;
                continue;
            }

            match self.normalizer.normalize(url) {
                Some(normalized) => {
                    self.store.merge(normalized);
                    stats.accepted += 1;
                }
                None => stats.discarded += 1,
            }
        }

        stats
    }
}

#[async_trait]
impl DomainProcessor for HarvestPipeline {
    async fn process(&self, domain: &str) -> Result<()> {
        let mut raw_urls = Vec::new();
        let mut every_source_failed = !self.sources.is_empty();

        for source in &self.sources {
            let report = source.query(domain).await;

            for outcome in report.outcomes.iter().filter(|o| o.is_failure()) {
                tracing::debug!("{}: {} {} failed", domain, source.name(), outcome.strategy());
            }

            tracing::info!(
                "{}: found {} URLs with parameters from {}",
                domain,
                report.urls.len(),
                source.name()
            );

            every_source_failed &= report.all_failed();
            raw_urls.extend(report.urls);
        }

        if every_source_failed {
            return Err(HarvestError::AllSourcesFailed(domain.to_string()));
        }

        if raw_urls.is_empty() {
            tracing::info!("{}: no URLs with parameters found", domain);
            return Ok(());
        }

        let stats = self.extract(&raw_urls);
        tracing::debug!(
            "{}: {} accepted, {} excluded, {} discarded",
            domain,
            stats.accepted,
            stats.excluded,
            stats.discarded
        );

        Ok(())
    }
}
