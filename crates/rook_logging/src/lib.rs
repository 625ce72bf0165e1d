//! Shared logging utilities for the rook binary and its daemon roles.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "rook.log";

/// Verbosity levels accepted by `--log-level`.
///
/// The names follow the level set the Ceph daemons understand; each maps onto
/// the closest tracing level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    Notice,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Tracing level this verbosity is rendered at.
    ///
    /// `critical` collapses into `error` and `notice` into `info`.
    pub fn tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Critical | LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Notice | LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }

    /// Default filter directive for the rook crates at this level.
    pub fn filter_directive(&self) -> String {
        let level = self.tracing_level().to_string().to_lowercase();
        format!("rook={level},rook_clusterd={level},rook_logging={level}")
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration for a rook process.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub level: LogLevel,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub log_dir: Option<PathBuf>,
}

/// Build the filter for a level, letting `RUST_LOG` override it.
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.filter_directive()))
}

/// Initialize tracing with a stderr writer and an optional rolling file writer.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: LogConfig<'_>) -> Result<Option<WorkerGuard>> {
    let filter = env_filter(config.level);

    let mut guard = None;
    let file_layer = match config.log_dir.as_ref() {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let appender =
                tracing_appender::rolling::daily(dir, log_file_prefix(config.app_name));
            let (writer, worker_guard) = tracing_appender::non_blocking(appender);
            guard = Some(worker_guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_filter(filter.clone()),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

fn log_file_prefix(app_name: &str) -> String {
    let sanitized: String = app_name
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
        .collect();
    if sanitized.is_empty() {
        LOG_FILE_PREFIX.to_string()
    } else {
        format!("{sanitized}.log")
    }
}
