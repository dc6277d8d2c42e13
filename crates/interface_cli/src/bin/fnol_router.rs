//! fnol-router binary
//!
//! Logs go to stderr so JSON on stdout stays machine-readable.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::{Cli, CliConfig};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let output = interface_cli::run(&cli, &config)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
