use std::sync::Arc;

use async_trait::async_trait;

use crate::app::{HarvestError, Result};
use crate::archive::{ArchiveSource, SourceReport, StrategyOutcome, UrlCollector};
use crate::config::{ResponseFormat, WaybackConfig, WaybackStrategy};
use crate::fetcher::Fetcher;

/// Wayback Machine CDX client.
///
/// Runs every configured strategy in order against the same index. The
/// strategies overlap; their results are merged under one seen-set so the
/// report lists each URL once.
pub struct WaybackClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    config: WaybackConfig,
}

impl WaybackClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: WaybackConfig) -> Self {
        Self { fetcher, config }
    }

    async fn run_strategy(&self, strategy: &WaybackStrategy, domain: &str) -> Result<Vec<String>> {
        let url = strategy.query_url(&self.config.base_url, domain);
        tracing::debug!("Querying Wayback ({}): {}", strategy.name, url);

        let response = self.fetcher.get(&url).await?;
        if !response.is_success() {
            return Err(HarvestError::Status {
                status: response.status,
                url,
            });
        }

        match strategy.format {
            ResponseFormat::Json => parse_json_rows(&response.body),
            ResponseFormat::Text => Ok(parse_text_lines(&response.text())),
        }
    }
}

#[async_trait]
impl ArchiveSource for WaybackClient {
    fn name(&self) -> &str {
        "Wayback"
    }

    async fn query(&self, domain: &str) -> SourceReport {
        let mut collector = UrlCollector::new();
        let mut outcomes = Vec::with_capacity(self.config.strategies.len());

        for strategy in &self.config.strategies {
            match self.run_strategy(strategy, domain).await {
                Ok(candidates) => {
                    let added = candidates.iter().filter(|url| collector.offer(url)).count();
                    outcomes.push(StrategyOutcome::Fetched {
                        strategy: strategy.name.clone(),
                        urls: added,
                    });
                }
                Err(e) => {
                    tracing::debug!("Wayback {} query failed for {}: {}", strategy.name, domain, e);
                    outcomes.push(StrategyOutcome::Failed {
                        strategy: strategy.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        SourceReport {
            urls: collector.into_urls(),
            outcomes,
        }
    }
}

/// First column of every row after the header. An empty body means no captures.
fn parse_json_rows(body: &[u8]) -> Result<Vec<String>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let rows: Vec<Vec<String>> = serde_json::from_slice(body)?;
    Ok(rows
        .into_iter()
        .skip(1)
        .filter_map(|row| row.into_iter().next())
        .collect())
}

fn parse_text_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
