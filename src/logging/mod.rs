//! Application logging functionality
//!
//! The terminal UI owns stdout, so interactive sessions log to a file under
//! ~/.config/typecase/logs/. Headless runs log to stderr.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::core::config::ConfigFile;
use crate::core::settings::APP_NAME;

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Name of today's log file
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d");
    format!("{APP_NAME}-{timestamp}.log")
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(current_log_file_name())
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Send logs to today's log file
///
/// The returned guard flushes buffered lines when dropped; keep it alive for
/// the whole session.
pub fn init_file_logging(level: &str) -> anyhow::Result<WorkerGuard> {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::never(&logs_dir, current_log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    tracing::info!(
        "=== {} started, logging to {:?} ===",
        APP_NAME,
        current_log_file()
    );
    Ok(guard)
}

/// Send logs to stderr
pub fn init_stderr_logging(level: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let name = current_log_file_name();
        assert!(name.starts_with("typecase-"));
        assert!(name.ends_with(".log"));
        assert_eq!(name.len(), "typecase-2024-01-01.log".len());
    }
}
