//! File-backed logging.
//!
//! Stdout belongs to the renderer, so diagnostics only go somewhere when
//! `RACER_LOG` names a file.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

/// Default filter when `RACER_LOG_LEVEL` is unset.
const DEFAULT_FILTER: &str = "info";

/// Build the logger for `path` with an env_logger filter spec such as
/// `debug` or `tui_racer_core=debug`.
pub fn builder_for(path: &str, filter: &str) -> Result<env_logger::Builder> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let mut builder = env_logger::Builder::new();
    builder
        .target(env_logger::Target::Pipe(Box::new(file)))
        .parse_filters(filter)
        .format_timestamp_millis()
        .write_style(env_logger::WriteStyle::Never);
    Ok(builder)
}

/// Install the file logger if `RACER_LOG` is set.
pub fn init_from_env() -> Result<()> {
    let Some(path) = std::env::var("RACER_LOG").ok().filter(|p| !p.trim().is_empty()) else {
        return Ok(());
    };
    let filter = std::env::var("RACER_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

    builder_for(&path, &filter)?
        .try_init()
        .context("installing logger")?;
    Ok(())
}
