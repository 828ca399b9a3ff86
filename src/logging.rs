//! Log file setup.
//!
//! The terminal belongs to the TUI, so logs go to
//! `<data dir>/tradescope/tradescope.log` through a non-blocking writer.
//! The filter comes from `--log-level`, then `RUST_LOG`, then `info`.

use std::fs;
use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::state::config::APP_NAME;

/// Log file name inside the data directory.
const LOG_FILE: &str = "tradescope.log";

/// Filter used when neither the flag nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "info";

/// Directory holding the log file.
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined or created.
pub fn log_dir() -> Result<PathBuf> {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .ok_or_else(|| eyre!("Could not determine data directory for the log file"))?;
    path.push(APP_NAME);
    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Builds the filter from an explicit level, `RUST_LOG`, or the default.
#[must_use]
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Installs the global subscriber writing to the log file.
///
/// The returned guard flushes buffered lines when dropped; keep it alive for
/// the whole run.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(level: Option<&str>) -> Result<WorkerGuard> {
    let dir = log_dir()?;
    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_filter(build_filter(level));

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| eyre!("Failed to install log subscriber: {e}"))?;

    tracing::debug!(path = %dir.join(LOG_FILE).display(), "logging initialized");
    Ok(guard)
}

// ============================================================================
// Tests
// ============================================================================
