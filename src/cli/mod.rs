pub mod commands;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::config::{parse_extension_list, HarvestConfig};
use crate::domain::TargetSources;

#[derive(Parser, Debug)]
#[command(name = "paramrake", version)]
#[command(about = "Passive URL parameter discovery from web archives", long_about = None)]
#[command(group(
    ArgGroup::new("targets")
        .required(true)
        .multiple(true)
        .args(["domain", "list", "subdomains"])
))]
pub struct Cli {
    /// Target domain
    #[arg(short, long)]
    pub domain: Option<String>,

    /// File containing a list of domains
    #[arg(short, long)]
    pub list: Option<PathBuf>,

    /// File containing a list of subdomains
    #[arg(short, long)]
    pub subdomains: Option<PathBuf>,

    /// Write normalized URLs to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the discovered parameter names to this file
    #[arg(long)]
    pub params_output: Option<PathBuf>,

    /// Comma-separated extensions to exclude
    #[arg(long)]
    pub exclude: Option<String>,

    /// Number of concurrent workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Placeholder for parameter values
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Configuration file (default: ~/.config/paramrake/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Silent mode (no banner)
    #[arg(long)]
    pub silent: bool,

    /// Verbose output (per-query diagnostics)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn target_sources(&self) -> TargetSources {
        TargetSources {
            domain: self.domain.clone(),
            domain_list: self.list.clone(),
            subdomain_list: self.subdomains.clone(),
        }
    }

    /// Flags given on the command line win over file values.
    pub fn apply_overrides(&self, config: &mut HarvestConfig) {
        if let Some(exclude) = &self.exclude {
            config.exclude_extensions = parse_extension_list(exclude);
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = placeholder.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
    }
}
