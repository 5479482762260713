//! Bounded fan-out over target domains.
//!
//! One task is spawned per domain; a counting semaphore admits at most
//! `workers` of them into their processing phase at once. [`DomainScheduler::run`]
//! returns only after every task has finished, successfully or not.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::app::{HarvestError, Result};

/// Work performed for a single domain once it is admitted.
#[async_trait]
pub trait DomainProcessor: Send + Sync {
    async fn process(&self, domain: &str) -> Result<()>;
}

/// Per-run tally. Individual results are only visible through whatever the
/// processor writes to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len()
    }
}

pub struct DomainScheduler {
    semaphore: Arc<Semaphore>,
    workers: usize,
}

impl DomainScheduler {
    /// A zero worker count is raised to one.
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(workers)),
            workers,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub async fn run(&self, domains: Vec<String>, processor: Arc<dyn DomainProcessor>) -> RunSummary {
        let mut names = Vec::with_capacity(domains.len());
        let mut handles = Vec::with_capacity(domains.len());

        for domain in domains {
            let semaphore = self.semaphore.clone();
            let processor = processor.clone();
            names.push(domain.clone());

            handles.push(tokio::spawn(async move {
                // Released on drop, including when `process` panics.
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| HarvestError::Task(e.to_string()))?;

                tracing::info!("Processing: {}", domain);
                let result = processor.process(&domain).await;
                match &result {
                    Ok(()) => tracing::info!("{}: completed", domain),
                    Err(e) => tracing::warn!("{}: {}", domain, e),
                }
                result
            }));
        }

        let mut summary = RunSummary::default();
        for (domain, joined) in names.into_iter().zip(join_all(handles).await) {
            match joined {
                Ok(Ok(())) => summary.succeeded += 1,
                Ok(Err(_)) => summary.failed.push(domain),
                Err(e) => {
                    tracing::error!("Task join error for {}: {}", domain, e);
                    summary.failed.push(domain);
                }
            }
        }

        summary
    }
}
