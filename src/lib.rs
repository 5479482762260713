//! # paramrake
//!
//! Passive discovery of historical URL parameters from web archives.
//!
//! ## Architecture
//!
//! ```text
//! domains → DomainScheduler → [Wayback, Common Crawl] → ExtensionFilter → Normalizer → ResultStore
//! ```
//!
//! - [`scheduler`]: bounded fan-out, one task per domain behind a semaphore
//! - [`archive`]: archive clients with per-strategy failure isolation
//! - [`normalizer`]: replaces every parameter value with a placeholder
//! - [`store`]: the shared parameter and URL sets
//!
//! ## Quick Start
//!
//! ```bash
//! paramrake -d example.com -o urls.txt
//! paramrake -l domains.txt --params-output params.txt -w 20
//! ```

/// Application context and error types.
pub mod app;

/// Wayback Machine and Common Crawl clients.
///
/// - [`ArchiveSource`](archive::ArchiveSource): async trait implemented by each client
/// - [`StrategyOutcome`](archive::StrategyOutcome): success or failure of one query strategy
pub mod archive;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from TOML with command-line overrides.
pub mod config;

/// Target loading and the normalized URL record.
pub mod domain;

/// HTTP transport.
pub mod fetcher;

/// Static-asset extension filter.
pub mod filter;

/// Per-domain harvest job.
pub mod harvest;

pub mod normalizer;

/// Result listing to a file or stdout.
pub mod output;

pub mod scheduler;

pub mod store;
