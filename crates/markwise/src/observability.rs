//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr, capped at `warn` unless `-v` is given
//! so normal output stays clean. When a log destination is configured, every
//! event that passes the filter is also written as JSON lines to a file.
//!
//! Log file resolution, highest precedence first:
//! 1. `MARKWISE_LOG_PATH` (exact file)
//! 2. `MARKWISE_LOG_DIR` (directory, file `markwise.jsonl`)
//! 3. `log_dir` from configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

const LOG_PATH_ENV: &str = "MARKWISE_LOG_PATH";
const LOG_DIR_ENV: &str = "MARKWISE_LOG_DIR";
const LOG_FILE_NAME: &str = "markwise.jsonl";

/// Where and how loudly to log.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// JSONL log file, if file logging is enabled.
    pub log_file: Option<PathBuf>,
    /// Most verbose level printed to stderr.
    pub stderr_level: LevelFilter,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to `log_dir`.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        Self {
            log_file: resolve_log_file(
                std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
                std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
                log_dir,
            ),
            stderr_level: LevelFilter::WARN,
        }
    }

    /// Adjust stderr verbosity for `-q` / `-v`.
    pub fn with_verbosity(mut self, quiet: bool, verbose: u8) -> Self {
        self.stderr_level = stderr_level(quiet, verbose);
        self
    }
}

fn resolve_log_file(
    log_path: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    log_path
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| {
            env_dir
                .filter(|d| !d.as_os_str().is_empty())
                .or(config_dir)
                .map(|dir| dir.join(LOG_FILE_NAME))
        })
}

const fn stderr_level(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

fn filter_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Build the global event filter.
///
/// `RUST_LOG` wins when set; otherwise `-q`/`-v` override the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(quiet, verbose, config_level)))
}

/// Keeps the file writer flushing until dropped.
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the log directory cannot be created, the log file cannot be
/// opened, or a global subscriber is already set.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(config.stderr_level);

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_current_span(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!(log_file = ?config.log_file, "logging initialized");
    Ok(ObservabilityGuard { _file: guard })
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
