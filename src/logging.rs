//! Logging infrastructure - structured tracing for the loader and call surface
//!
//! Design: Uses `tracing` throughout with:
//! - Level, format and destination chosen by `LogConfig`
//! - Zero cost when no subscriber is installed
//! - Span-based timing through `perf::track`
//! - Console or daily-rotated file output

use crate::config::LoggingSettings;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

static LOGGER_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-line
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// Structured JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format `{}`", other)),
        }
    }
}

/// Log output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
    /// File with daily rotation
    File { directory: String, prefix: String },
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub format: LogFormat,
    pub output: LogOutput,
    /// Emit span enter/close events
    pub span_events: bool,
    /// Extra filter directives, e.g. `glbind::call=trace`
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Compact,
            output: LogOutput::Stderr,
            span_events: false,
            filter: None,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `GLBIND_LOG_*` environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // GLBIND_LOG_LEVEL: trace, debug, info, warn, error
        if let Ok(level) = std::env::var("GLBIND_LOG_LEVEL") {
            config.level = Level::from_str(&level).unwrap_or(Level::INFO);
        }

        // GLBIND_LOG_FORMAT: pretty, compact, json
        if let Ok(format) = std::env::var("GLBIND_LOG_FORMAT") {
            config.format = format.parse().unwrap_or_default();
        }

        // GLBIND_LOG_FILE: path of the log file, rotated daily
        if let Ok(path) = std::env::var("GLBIND_LOG_FILE") {
            config.output = file_output(Path::new(&path));
        }

        config.span_events = std::env::var("GLBIND_LOG_SPANS").is_ok();

        config
    }

    /// Build from the `[logging]` section of a loader config
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self {
            level: Level::from_str(&settings.level).unwrap_or(Level::INFO),
            format: settings.format,
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

fn file_output(path: &Path) -> LogOutput {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());
    let prefix = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "glbind.log".to_string());
    LogOutput::File { directory, prefix }
}

/// Install the global subscriber
///
/// Only the first call has an effect. The returned guard flushes buffered
/// output when dropped and must be kept alive by the caller.
pub fn init(config: LogConfig) -> Option<WorkerGuard> {
    if LOGGER_INITIALIZED.set(()).is_err() {
        return None;
    }

    let (writer, guard) = match &config.output {
        LogOutput::Stdout => tracing_appender::non_blocking(std::io::stdout()),
        LogOutput::Stderr => tracing_appender::non_blocking(std::io::stderr()),
        LogOutput::File { directory, prefix } => {
            tracing_appender::non_blocking(rolling::daily(directory, prefix))
        }
    };

    let layer = build_layer(config.format, writer, span_events_config(config.span_events));
    let installed = tracing_subscriber::registry()
        .with(layer)
        .with(build_filter(&config))
        .try_init();

    // Another subscriber already owns the process; keep it.
    installed.ok().map(|_| guard)
}

/// Whether `init` has run
pub fn is_initialized() -> bool {
    LOGGER_INITIALIZED.get().is_some()
}

fn build_layer(
    format: LogFormat,
    writer: NonBlocking,
    spans: FmtSpan,
) -> Box<dyn Layer<Registry> + Send + Sync> {
    let base = fmt::layer()
        .with_writer(writer)
        .with_span_events(spans)
        .with_target(true);
    match format {
        LogFormat::Pretty => base.pretty().boxed(),
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Json => base.json().boxed(),
    }
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    let base = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str().to_lowercase()));

    match &config.filter {
        Some(directives) => directives
            .split(',')
            .filter(|d| !d.trim().is_empty())
            .fold(base, |filter, directive| match directive.trim().parse() {
                Ok(parsed) => filter.add_directive(parsed),
                Err(_) => {
                    tracing::warn!("invalid filter directive: {}", directive);
                    filter
                }
            }),
        None => base,
    }
}

fn span_events_config(enabled: bool) -> FmtSpan {
    if enabled {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

/// Performance tracking utilities
pub mod perf {
    use std::time::{Duration, Instant};
    use tracing::debug;

    /// Track an operation's duration; logs on drop
    #[must_use]
    pub fn track(operation: &'static str) -> PerformanceGuard {
        PerformanceGuard {
            operation,
            start: Instant::now(),
        }
    }

    pub struct PerformanceGuard {
        operation: &'static str,
        start: Instant,
    }

    impl PerformanceGuard {
        pub fn elapsed(&self) -> Duration {
            self.start.elapsed()
        }
    }

    impl Drop for PerformanceGuard {
        fn drop(&mut self) {
            debug!(
                operation = self.operation,
                duration_us = self.start.elapsed().as_micros() as u64,
                "operation completed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.output, LogOutput::Stderr);
        assert!(config.filter.is_none());
    }

    #[test]
    fn test_builder() {
        let config = LogConfig::new()
            .with_level(Level::TRACE)
            .with_format(LogFormat::Json)
            .with_span_events(true)
            .with_filter("glbind::call=trace");
        assert_eq!(config.level, Level::TRACE);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.span_events);
        assert_eq!(config.filter.as_deref(), Some("glbind::call=trace"));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_from_settings() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            format: LogFormat::Pretty,
        };
        let config = LogConfig::from_settings(&settings);
        assert_eq!(config.level, Level::DEBUG);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_file_output_split() {
        assert_eq!(
            file_output(Path::new("/var/log/glbind.log")),
            LogOutput::File {
                directory: "/var/log".into(),
                prefix: "glbind.log".into()
            }
        );
        assert_eq!(
            file_output(Path::new("probe.log")),
            LogOutput::File {
                directory: ".".into(),
                prefix: "probe.log".into()
            }
        );
    }

    #[test]
    fn test_init_idempotent() {
        let _guard = init(LogConfig::default().with_level(Level::WARN));
        assert!(init(LogConfig::default()).is_none());
        assert!(is_initialized());
    }

    #[test]
    fn test_perf_guard_elapsed() {
        let guard = perf::track("unit");
        assert!(guard.elapsed() <= std::time::Duration::from_secs(5));
    }
}
