use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use paramrake::cli::{commands, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only results.
    let default_level = if cli.verbose {
        "paramrake=debug"
    } else {
        "paramrake=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    commands::run(&cli).await?;

    Ok(())
}
