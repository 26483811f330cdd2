//! File logging for TUI mode
//!
//! The terminal belongs to ratatui while the app runs, so all `tracing`
//! output goes to a log file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FILE_NAME: &str = "pokesearch.log";

/// `<cache dir>/pokesearch`, or `./logs` when the platform has no cache dir.
pub fn default_log_dir() -> PathBuf {
    dirs_next::cache_dir()
        .map(|dir| dir.join("pokesearch"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Install the file subscriber. Keep the guard alive until exit so buffered
/// lines are flushed.
pub fn init(log_dir: &Path) -> io::Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(path = %log_dir.join(LOG_FILE_NAME).display(), "logging initialized");
    Ok(guard)
}
