//! Binary crate for the `skycast` command-line front-end.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive credential configuration
//! - Human-friendly output formatting, including local-time rendering

use clap::Parser;

mod cli;
mod format;
mod localtime;
mod random;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is honored as just another source for the API key.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skycast_cli=info,skycast_core=info".into()),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
