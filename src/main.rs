//! customs-expand CLI entry point

use clap::Parser;
use customs_expand::cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_env("CUSTOMS_EXPAND_LOG")
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Expand(args) => customs_expand::cli::expand::run(args, config_path).await,
        Commands::Terms(args) => customs_expand::cli::terms::run(args, config_path),
        Commands::Prompt(args) => customs_expand::cli::prompt::run(args, config_path),
    }
}
