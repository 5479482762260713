use crate::app::{AppContext, HarvestError, Result};
use crate::cli::Cli;
use crate::config::HarvestConfig;
use crate::domain::load_targets;
use crate::output;

const BANNER: &str = r"
                                              __
    ____  ____ __________ _____ ___  _________ _/ /_____
   / __ \/ __ `/ ___/ __ `/ __ `__ \/ ___/ __ `/ //_/ _ \
  / /_/ / /_/ / /  / /_/ / / / / / / /  / /_/ / ,< /  __/
 / .___/\__,_/_/   \__,_/_/ /_/ /_/_/   \__,_/_/|_|\___/
/_/
        passive URL parameter discovery
";

/// Resolve configuration from the file and command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<HarvestConfig> {
    let mut config = HarvestConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

pub async fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    if !cli.silent {
        eprintln!("{}", BANNER);
    }

    let domains = load_targets(&cli.target_sources());
    if domains.is_empty() {
        return Err(HarvestError::NoTargets);
    }

    tracing::info!(
        "Processing {} domain(s) with {} workers",
        domains.len(),
        config.workers
    );

    let ctx = AppContext::new(&config)?;
    let (summary, results) = ctx.harvest(domains).await;

    output::emit(&results.urls, cli.output.as_deref())?;

    if let Some(path) = cli.params_output.as_deref() {
        output::emit(&results.params, Some(path))?;
    }

    if !summary.failed.is_empty() {
        tracing::warn!(
            "{} of {} domain(s) failed: {}",
            summary.failed.len(),
            summary.total(),
            summary.failed.join(", ")
        );
    }

    tracing::info!("Found {} unique parameters", results.param_count());
    tracing::info!("Generated {} unique URLs", results.url_count());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_resolve_config_rejects_zero_workers() {
        let cli = Cli::try_parse_from(["paramrake", "-d", "x.com", "-w", "0"]).unwrap();
        let result = resolve_config(&cli);
        assert!(matches!(result, Err(HarvestError::Config(_))));
    }

    #[test]
    fn test_resolve_config_reads_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "workers = 7\nplaceholder = \"P\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "paramrake",
            "-d",
            "x.com",
            "-c",
            path.to_str().unwrap(),
            "--placeholder",
            "Q",
        ])
        .unwrap();

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.workers, 7);
        assert_eq!(config.placeholder, "Q");
    }

    #[tokio::test]
    async fn test_run_without_loadable_targets_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let cli = Cli::try_parse_from([
            "paramrake",
            "--silent",
            "-l",
            missing.to_str().unwrap(),
            "-c",
            dir.path().join("none.toml").to_str().unwrap(),
        ])
        .unwrap();

        // Config file is missing too, so the config error surfaces first.
        assert!(matches!(run(&cli).await, Err(HarvestError::Config(_))));

        let empty = dir.path().join("empty.toml");
        std::fs::write(&empty, "").unwrap();
        let cli = Cli::try_parse_from([
            "paramrake",
            "--silent",
            "-l",
            missing.to_str().unwrap(),
            "-c",
            empty.to_str().unwrap(),
        ])
        .unwrap();

        assert!(matches!(run(&cli).await, Err(HarvestError::NoTargets)));
    }
}
