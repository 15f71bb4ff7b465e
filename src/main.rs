use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use categorical_bayes::config::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(cli);
    categorical_bayes::run(&config, std::io::stdout().lock())
}
