pub mod http_fetcher;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::app::Result;

#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Plain GET transport used by the archive clients.
///
/// Any status is returned as-is; only transport failures (DNS, connect,
/// timeout, body read) are errors.
#[async_trait]
pub trait Fetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse>;
}
