use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::app::{HarvestError, Result};
use crate::fetcher::{FetchResponse, Fetcher};

/// Canned responses keyed by exact request URL. Unknown URLs fail like a
/// refused connection.
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, (u16, String)>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), (status, body.into()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.responses.get(url) {
            Some((status, body)) => Ok(FetchResponse {
                status: *status,
                body: body.clone().into_bytes(),
            }),
            None => Err(HarvestError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("no mock for {}", url),
            ))),
        }
    }
}
