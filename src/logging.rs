//! `env_logger` setup for the binaries.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

/// Log to a file. The terminal UI owns stdout/stderr, so this is its only sink.
pub fn init_file(filter: &str, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::new()
        .parse_filters(filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}

/// Log to stderr (headless runner).
pub fn init_stderr(filter: &str) -> Result<()> {
    env_logger::Builder::new()
        .parse_filters(filter)
        .target(env_logger::Target::Stderr)
        .try_init()
        .context("install logger")?;
    Ok(())
}
