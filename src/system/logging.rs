//! Logging system initialization
//!
//! Installs the global tracing subscriber from the `[logging]` section of the
//! static configuration.

use std::io::Write;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::{LoggingConfig, StaticConfig};
use crate::errors::{ProfileError, Result};

/// Initialize logging system based on configuration
///
/// Call once, after the configuration has been loaded. The returned
/// `WorkerGuard` must be kept alive for the duration of the program so that
/// buffered log lines are flushed.
pub fn init_logging(config: &StaticConfig) -> Result<WorkerGuard> {
    let writer = build_writer(&config.logging)?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.logging.level).map_err(|e| {
        ProfileError::config(format!(
            "Invalid log level '{}': {}",
            config.logging.level, e
        ))
    })?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_target(false)
        .with_ansi(log_file(&config.logging).is_none());

    let installed = if config.logging.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| ProfileError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

fn log_file(config: &LoggingConfig) -> Option<&str> {
    config.file.as_deref().filter(|f| !f.is_empty())
}

fn build_writer(config: &LoggingConfig) -> Result<Box<dyn Write + Send + Sync>> {
    let Some(log_file) = log_file(config) else {
        // CLI 输出走 stdout，日志走 stderr
        return Ok(Box::new(std::io::stderr()));
    };

    if config.enable_rotation {
        let path = Path::new(log_file);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("dating-profile.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
            .map_err(|e| {
                ProfileError::file_operation(format!(
                    "Failed to create rolling log appender in {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| {
                ProfileError::file_operation(format!("Failed to open log file {}: {}", log_file, e))
            })?;
        Ok(Box::new(file))
    }
}
