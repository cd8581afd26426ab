//! Logging setup for the `datazoom` binary
//!
//! Structured logging via `tracing`. Events go to stderr so that command
//! output on stdout stays machine-readable.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "DATAZOOM_LOG";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive: trace, debug, info, warn, error, off, or per-target
    pub level: String,

    pub format: LogFormat,

    /// Colored output (text format only). Off by default when stderr is
    /// not a terminal.
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
            color: std::io::stderr().is_terminal(),
        }
    }
}

impl LoggingConfig {
    /// Turn colored output off, leaving it as detected otherwise
    pub fn without_color(mut self, no_color: bool) -> Self {
        if no_color {
            self.color = false;
        }
        self
    }
}

/// Errors that can occur when initializing logging
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Build the event filter, preferring `DATAZOOM_LOG` over the config
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| LoggingError::InvalidFilter(e.to_string()))
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_env_filter(config)?;
    let subscriber = Registry::default().with(filter);

    let installed = match config.format {
        LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| LoggingError::Init(e.to_string()))
}
