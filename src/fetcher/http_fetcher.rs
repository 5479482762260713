use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::app::Result;
use crate::config::HarvestConfig;
use crate::fetcher::{FetchResponse, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &HarvestConfig) -> Result<Self> {
        Self::new(config.timeout(), &config.user_agent)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(FetchResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::HarvestError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cdx"))
            .and(query_param("url", "*.example.com/*"))
            .respond_with(ResponseTemplate::new(200).set_body_string("http://example.com/?a=1\n"))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5), "paramrake-test").unwrap();
        let response = fetcher
            .get(&format!("{}/cdx?url=*.example.com/*", mock_server.uri()))
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.text(), "http://example.com/?a=1\n");
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5), "paramrake-test").unwrap();
        let response = fetcher.get(&mock_server.uri()).await.unwrap();

        assert_eq!(response.status, 503);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(Duration::from_millis(200), "paramrake-test").unwrap();
        let result = fetcher.get(&mock_server.uri()).await;

        assert!(matches!(result, Err(HarvestError::Http(_))));
    }
}
