use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::app::{HarvestError, Result};
use crate::archive::{ArchiveSource, SourceReport, StrategyOutcome, UrlCollector};
use crate::config::CommonCrawlConfig;
use crate::fetcher::Fetcher;

#[derive(Debug, Deserialize)]
struct IndexRecord {
    url: String,
}

/// Common Crawl columnar index client.
///
/// Queries each configured crawl index in order. Once more than
/// `result_cap` URLs have been collected the remaining indexes are skipped.
pub struct CommonCrawlClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    config: CommonCrawlConfig,
}

impl CommonCrawlClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: CommonCrawlConfig) -> Self {
        Self { fetcher, config }
    }

    async fn query_index(&self, index: &str, domain: &str) -> Result<Vec<String>> {
        let url = self.config.query_url(index, domain);
        tracing::debug!("Querying Common Crawl {}: {}", index, url);

        let response = self.fetcher.get(&url).await?;
        if !response.is_success() {
            return Err(HarvestError::Status {
                status: response.status,
                url,
            });
        }

        Ok(parse_index_lines(&response.text()))
    }
}

#[async_trait]
impl ArchiveSource for CommonCrawlClient {
    fn name(&self) -> &str {
        "Common Crawl"
    }

    async fn query(&self, domain: &str) -> SourceReport {
        let mut collector = UrlCollector::new();
        let mut outcomes = Vec::new();

        for index in &self.config.indexes {
            match self.query_index(index, domain).await {
                Ok(candidates) => {
                    let added = candidates.iter().filter(|url| collector.offer(url)).count();
                    outcomes.push(StrategyOutcome::Fetched {
                        strategy: index.clone(),
                        urls: added,
                    });
                }
                Err(e) => {
                    tracing::debug!("Common Crawl {} query failed for {}: {}", index, domain, e);
                    outcomes.push(StrategyOutcome::Failed {
                        strategy: index.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            if collector.len() > self.config.result_cap {
                tracing::debug!(
                    "Common Crawl cap of {} reached for {}, skipping remaining indexes",
                    self.config.result_cap,
                    domain
                );
                break;
            }
        }

        SourceReport {
            urls: collector.into_urls(),
            outcomes,
        }
    }
}

/// One JSON record per line; lines that fail to decode are skipped.
fn parse_index_lines(body: &str) -> Vec<String> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str::<IndexRecord>(line).ok())
        .map(|record| record.url)
        .collect()
}
