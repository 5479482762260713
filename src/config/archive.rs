use serde::Deserialize;

/// Body format returned by a CDX query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// JSON array of rows, first row is the header
    Json,
    /// One URL per line
    Text,
}

impl ResponseFormat {
    pub fn as_output_param(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Text => "text",
        }
    }
}

/// One independent query against the Wayback CDX index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WaybackStrategy {
    /// Label used in diagnostics
    pub name: String,

    /// Value of the `url` parameter; `{domain}` is substituted
    pub url_pattern: String,

    pub format: ResponseFormat,

    /// Optional `matchType` parameter (e.g. "domain")
    #[serde(default)]
    pub match_type: Option<String>,

    /// Optional status code filter (e.g. "200")
    #[serde(default)]
    pub status_filter: Option<String>,
}

impl WaybackStrategy {
    /// Build the full query URL for `domain` against the CDX endpoint at `base_url`.
    pub fn query_url(&self, base_url: &str, domain: &str) -> String {
        let mut url = format!(
            "{}?url={}",
            base_url,
            self.url_pattern.replace("{domain}", domain)
        );

        if let Some(match_type) = &self.match_type {
            url.push_str(&format!("&matchType={}", match_type));
        }

        url.push_str(&format!(
            "&output={}&fl=original&collapse=urlkey",
            self.format.as_output_param()
        ));

        if let Some(status) = &self.status_filter {
            url.push_str(&format!("&filter=statuscode:{}", status));
        }

        url
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WaybackConfig {
    /// CDX search endpoint
    pub base_url: String,

    /// Strategies, queried in order and merged under one seen-set
    pub strategies: Vec<WaybackStrategy>,
}

impl Default for WaybackConfig {
    fn default() -> Self {
        Self {
            base_url: "https://web.archive.org/cdx/search/cdx".to_string(),
            strategies: vec![
                WaybackStrategy {
                    name: "subdomain-wildcard".to_string(),
                    url_pattern: "*.{domain}/*".to_string(),
                    format: ResponseFormat::Json,
                    match_type: None,
                    status_filter: None,
                },
                WaybackStrategy {
                    name: "root-domain-text".to_string(),
                    url_pattern: "{domain}/*".to_string(),
                    format: ResponseFormat::Text,
                    match_type: None,
                    status_filter: Some("200".to_string()),
                },
                WaybackStrategy {
                    name: "domain-match".to_string(),
                    url_pattern: "*.{domain}/*".to_string(),
                    format: ResponseFormat::Json,
                    match_type: Some("domain".to_string()),
                    status_filter: Some("200".to_string()),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommonCrawlConfig {
    /// Index server root; each index lives at `{base_url}/{index}-index`
    pub base_url: String,

    /// Crawl identifiers, most recent first
    pub indexes: Vec<String>,

    /// Stop querying further indexes once more than this many URLs were collected
    pub result_cap: usize,
}

impl Default for CommonCrawlConfig {
    fn default() -> Self {
        Self {
            base_url: "https://index.commoncrawl.org".to_string(),
            indexes: vec![
                "CC-MAIN-2024-10".to_string(),
                "CC-MAIN-2024-05".to_string(),
                "CC-MAIN-2023-50".to_string(),
            ],
            result_cap: 5000,
        }
    }
}

impl CommonCrawlConfig {
    pub fn query_url(&self, index: &str, domain: &str) -> String {
        format!(
            "{}/{}-index?url=*.{}/*&output=json",
            self.base_url, index, domain
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wayback_query_urls() {
        let config = WaybackConfig::default();
        let urls: Vec<String> = config
            .strategies
            .iter()
            .map(|s| s.query_url(&config.base_url, "example.com"))
            .collect();

        assert_eq!(
            urls[0],
            "https://web.archive.org/cdx/search/cdx?url=*.example.com/*&output=json&fl=original&collapse=urlkey"
        );
        assert_eq!(
            urls[1],
            "https://web.archive.org/cdx/search/cdx?url=example.com/*&output=text&fl=original&collapse=urlkey&filter=statuscode:200"
        );
        assert_eq!(
            urls[2],
            "https://web.archive.org/cdx/search/cdx?url=*.example.com/*&matchType=domain&output=json&fl=original&collapse=urlkey&filter=statuscode:200"
        );
    }

    #[test]
    fn test_common_crawl_query_url() {
        let config = CommonCrawlConfig::default();
        assert_eq!(
            config.query_url("CC-MAIN-2024-10", "example.com"),
            "https://index.commoncrawl.org/CC-MAIN-2024-10-index?url=*.example.com/*&output=json"
        );
        assert_eq!(config.result_cap, 5000);
    }

    #[test]
    fn test_strategy_from_toml() {
        let content = r#"
name = "custom"
url_pattern = "{domain}/api/*"
format = "text"
"#;
        let strategy: WaybackStrategy = toml::from_str(content).unwrap();
        assert_eq!(strategy.format, ResponseFormat::Text);
        assert!(strategy.match_type.is_none());
        assert_eq!(
            strategy.query_url("http://cdx", "x.com"),
            "http://cdx?url=x.com/api/*&output=text&fl=original&collapse=urlkey"
        );
    }
}
