use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not read target list {path}: {reason}")]
    TargetList { path: String, reason: String },

    #[error("No domains to process")]
    NoTargets,

    #[error("Every archive query failed for {0}")]
    AllSourcesFailed(String),

    #[error("Task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, HarvestError>;
