use std::sync::Arc;

use crate::app::error::Result;
use crate::archive::{ArchiveSource, CommonCrawlClient, WaybackClient};
use crate::config::HarvestConfig;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::filter::ExtensionFilter;
use crate::harvest::HarvestPipeline;
use crate::normalizer::Normalizer;
use crate::scheduler::{DomainScheduler, RunSummary};
use crate::store::{ResultSet, ResultStore};

pub struct AppContext {
    pub pipeline: Arc<HarvestPipeline>,
    pub scheduler: DomainScheduler,
}

impl AppContext {
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::from_config(config)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: &HarvestConfig, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let sources: Vec<Arc<dyn ArchiveSource>> = vec![
            Arc::new(WaybackClient::new(fetcher.clone(), config.wayback.clone())),
            Arc::new(CommonCrawlClient::new(
                fetcher,
                config.common_crawl.clone(),
            )),
        ];

        let pipeline = Arc::new(HarvestPipeline::new(
            sources,
            ExtensionFilter::new(&config.exclude_extensions),
            Normalizer::new(config.placeholder.clone()),
            Arc::new(ResultStore::new()),
        ));

        Self {
            pipeline,
            scheduler: DomainScheduler::new(config.workers),
        }
    }

    /// Harvest every domain, then return the merged results.
    pub async fn harvest(&self, domains: Vec<String>) -> (RunSummary, ResultSet) {
        let summary = self.scheduler.run(domains, self.pipeline.clone()).await;
        (summary, self.pipeline.store().snapshot())
    }
}
