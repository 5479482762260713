//! Configuration for paramrake.
//!
//! Settings are read from `--config <path>` or, when present,
//! `~/.config/paramrake/config.toml`. A missing default file is not an error:
//! built-in defaults are used. Command-line flags override file values.

pub mod archive;

pub use archive::{CommonCrawlConfig, ResponseFormat, WaybackConfig, WaybackStrategy};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_PLACEHOLDER: &str = "FUZZ";
pub const DEFAULT_EXCLUDE: &str = "jpg,jpeg,png,gif,css,js,svg,woff,woff2,ttf,eot,ico";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Maximum number of domains whose archive queries run at once
    pub workers: usize,

    /// Token substituted for every parameter value
    pub placeholder: String,

    /// File extensions (no leading dot) whose URLs are dropped
    pub exclude_extensions: Vec<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    pub user_agent: String,

    pub wayback: WaybackConfig,

    pub common_crawl: CommonCrawlConfig,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            exclude_extensions: parse_extension_list(DEFAULT_EXCLUDE),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("paramrake/", env!("CARGO_PKG_VERSION")).to_string(),
            wayback: WaybackConfig::default(),
            common_crawl: CommonCrawlConfig::default(),
        }
    }
}

impl HarvestConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is read
    /// if it exists and defaults are returned otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_config_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: HarvestConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(config)
    }

    /// `~/.config/paramrake/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("paramrake").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::Invalid(
                "worker count must be at least 1".into(),
            ));
        }
        if self.placeholder.is_empty() {
            return Err(ConfigError::Invalid("placeholder must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout must be at least 1 second".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Split a comma-separated extension list, dropping blanks and leading dots.
pub fn parse_extension_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{0}")]
    Invalid(String),
}
