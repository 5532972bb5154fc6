#![forbid(unsafe_code)]

mod commands;
mod config;

use std::io::Write;

use anyhow::{Context, Result};
use texcaps_catalog::FormatCatalog;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<()> {
    let config = Config::load()?;

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid log filter {:?}", config.log_level))?;
    // stdout carries command output; keep logs off it.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = FormatCatalog::build().context("failed to build the texture format catalog")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(
        &catalog,
        &config.features,
        &config.command,
        config.output,
        &mut out,
    )?;
    out.flush()?;
    Ok(())
}
