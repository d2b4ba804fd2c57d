mod cli;
mod config;
mod errors;
mod llm_client;
mod models;
mod pipeline;
mod prompt;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Args;
use crate::config::Config;

#[tokio::main]
async fn main() {
    // .env first so clap's env fallbacks see CLAUDE_API_KEY / CLAUDE_MODEL
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(args).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    info!("Starting resume-builder v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_args(args)?;
    let output = pipeline::run(&config)
        .await
        .context("Resume generation failed")?;

    info!("Done: {}", output.display());
    Ok(())
}
