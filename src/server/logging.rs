//! Logging initialization for the server binary.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::sync::Arc;

use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::config::{LogFormat, LoggingConfig};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Install the global tracing subscriber described by `config`.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| LoggingError::InvalidFilter(e.to_string()))?;

    let (writer, ansi) = make_writer(config)?;
    let layer = build_layer(config, writer, ansi);

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

fn make_writer(config: &LoggingConfig) -> Result<(BoxMakeWriter, bool), LoggingError> {
    let writer = match config.output.as_str() {
        "stdout" => (
            BoxMakeWriter::new(io::stdout),
            config.color && io::stdout().is_terminal(),
        ),
        "stderr" => (
            BoxMakeWriter::new(io::stderr),
            config.color && io::stderr().is_terminal(),
        ),
        path => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LoggingError::FileOpen(path.to_string(), e))?;
            (BoxMakeWriter::new(Arc::new(file)), false)
        }
    };
    Ok(writer)
}

fn build_layer(config: &LoggingConfig, writer: BoxMakeWriter, ansi: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_ansi(ansi)
        .with_target(config.target)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer);

    match (config.format, config.timestamps) {
        (LogFormat::Text, true) => layer.boxed(),
        (LogFormat::Text, false) => layer.without_time().boxed(),
        (LogFormat::Json, true) => layer.json().boxed(),
        (LogFormat::Json, false) => layer.json().without_time().boxed(),
    }
}

/// Errors that can occur during logging initialization.
#[derive(Debug)]
pub enum LoggingError {
    /// Invalid log filter string.
    InvalidFilter(String),
    /// Failed to open log file.
    FileOpen(String, io::Error),
    /// A global subscriber is already installed.
    AlreadyInitialized(String),
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggingError::InvalidFilter(msg) => write!(f, "Invalid log filter: {}", msg),
            LoggingError::FileOpen(path, e) => {
                write!(f, "Failed to open log file '{}': {}", path, e)
            }
            LoggingError::AlreadyInitialized(msg) => {
                write!(f, "Logging already initialized: {}", msg)
            }
        }
    }
}

impl std::error::Error for LoggingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LoggingConfig {
            level: "squirrel_server=notalevel".into(),
            ..LoggingConfig::default()
        };
        assert!(matches!(init(&config), Err(LoggingError::InvalidFilter(_))));
    }

    #[test]
    fn test_unwritable_log_file_rejected() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let config = LoggingConfig {
            output: dir.path().join("missing").join("server.log").display().to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(make_writer(&config), Err(LoggingError::FileOpen(..))));
        Ok(())
    }
}
