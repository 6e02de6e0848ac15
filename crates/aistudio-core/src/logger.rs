//! Tracing subscriber setup: console on stderr plus an optional rolling file.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use crate::error::{AppError, AppResult};

/// File name prefix for rolling log files.
pub const LOG_FILE_PREFIX: &str = "aistudio-proxy.log";

/// Chatty dependencies capped regardless of the requested level.
const QUIET_TARGETS: &[&str] = &["hyper=warn", "reqwest=warn", "h2=warn", "rustls=warn"];

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directive string, e.g. `info` or `aistudio_core=debug`.
    pub level: String,
    /// Write a daily rolling log here in addition to stderr.
    pub log_dir: Option<PathBuf>,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), log_dir: None, ansi: true }
    }
}

/// Parses `level` into a filter and appends the quiet-target caps.
pub fn build_filter(level: &str) -> AppResult<EnvFilter> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| AppError::Logging(format!("invalid log filter '{level}': {e}")))?;

    QUIET_TARGETS.iter().try_fold(filter, |filter, directive| {
        directive
            .parse()
            .map(|d| filter.add_directive(d))
            .map_err(|e| AppError::Logging(format!("invalid directive '{directive}': {e}")))
    })
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held until
/// shutdown; it is `None` when no log directory is configured.
pub fn init_logging(config: &LogConfig) -> AppResult<Option<WorkerGuard>> {
    let filter = build_filter(&config.level)?;

    let console = fmt::layer().with_writer(std::io::stderr).with_ansi(config.ansi);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!("[Logger] Log level: {}", config.level);
    if let Some(dir) = &config.log_dir {
        tracing::info!("[Logger] Log files: {}/{}.*", dir.display(), LOG_FILE_PREFIX);
    }

    Ok(guard)
}
