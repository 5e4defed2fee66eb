//! Tracing subscriber setup.
//!
//! Logs always go to stderr so stdout stays the conversation. When a log
//! directory is configured, two daily-rotated files are written there as well:
//! everything the level filter lets through, and a second file holding only
//! errors. Old rotations beyond `[logging].max_files` are pruned.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LumaConfig;

/// File name prefix for rotated logs (`lumalite.log.YYYY-MM-DD`).
pub const LOG_FILE_PREFIX: &str = "lumalite.log";

/// File name prefix for the error-only logs (`lumalite-error.log.YYYY-MM-DD`).
pub const ERROR_LOG_FILE_PREFIX: &str = "lumalite-error.log";

/// Create a daily-rotated, non-blocking log writer in `log_dir`.
///
/// At most `max_files` rotations with this prefix are kept; `0` keeps them all.
/// The returned guard must be kept alive for as long as logs should be flushed.
pub fn create_log_writer(
    log_dir: &Path,
    prefix: &str,
    max_files: usize,
) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix);
    if max_files > 0 {
        builder = builder.max_log_files(max_files);
    }
    let file_appender = builder
        .build(log_dir)
        .with_context(|| format!("failed to open log file in {}", log_dir.display()))?;
    Ok(tracing_appender::non_blocking(file_appender))
}

fn file_layer<S>(writer: NonBlocking, max_level: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(max_level)
}

/// Install the global subscriber. Returns the file writers' guards, if any.
pub fn init_tracing(config: &LumaConfig) -> Result<Vec<WorkerGuard>> {
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let mut guards = Vec::new();
    let (all_layer, error_layer) = match config.resolved_log_dir() {
        Some(dir) => {
            let max_files = config.logging.max_files;
            let (writer, guard) = create_log_writer(&dir, LOG_FILE_PREFIX, max_files)?;
            guards.push(guard);
            let (error_writer, error_guard) =
                create_log_writer(&dir, ERROR_LOG_FILE_PREFIX, max_files)?;
            guards.push(error_guard);
            (
                Some(file_layer(writer, LevelFilter::TRACE)),
                Some(file_layer(error_writer, LevelFilter::ERROR)),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(all_layer)
        .with(error_layer)
        .init();

    Ok(guards)
}
