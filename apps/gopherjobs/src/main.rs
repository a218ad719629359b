mod classify;
mod config;
mod errors;
mod ingest;
mod models;
mod pipeline;
mod render;
mod test_utils;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

fn main() -> Result<()> {
    // Load configuration first (fails on malformed settings)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        "Starting Gopher Jobs site generator v{}",
        env!("CARGO_PKG_VERSION")
    );

    let summary = pipeline::run(&config)
        .inspect_err(|e| error!("Site generation failed: {e}"))
        .context("site generation failed")?;

    info!(
        "Done: {} of {} jobs published across {} list pages",
        summary.kept, summary.loaded, summary.list_pages
    );

    Ok(())
}
