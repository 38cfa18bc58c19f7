//! Structured logging infrastructure for Fretwise

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: String,
    /// Whether to enable JSON formatting
    pub json_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include spans in the output
    pub include_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
            include_spans: false,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_new(&config.level).or_else(|_| EnvFilter::try_new("info"))?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let layer = fmt::layer()
        .with_span_events(span_events)
        .with_target(true);

    match (config.json_format, config.file_path) {
        (true, Some(path)) => {
            let file = open_log_file(&path)?;
            registry.with(layer.json().with_writer(file)).init();
        }
        (true, None) => {
            registry.with(layer.json()).init();
        }
        (false, Some(path)) => {
            let file = open_log_file(&path)?;
            registry
                .with(layer.with_ansi(false).with_writer(file))
                .init();
        }
        (false, None) => {
            registry.with(layer).init();
        }
    }

    debug!("Logging initialized at level '{}'", config.level);
    Ok(())
}

fn open_log_file(path: &str) -> anyhow::Result<std::fs::File> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(file)
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default())
}

/// Initialize logging for development (debug level, spans included)
pub fn init_dev_logging() -> anyhow::Result<()> {
    init_logging(LoggingConfig {
        level: "debug".to_string(),
        include_spans: true,
        ..LoggingConfig::default()
    })
}
