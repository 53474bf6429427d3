//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: failures that end the run
//! - `warn`: dataset shape issues from local sources
//! - `info`: load, filter and render summaries with counts
//! - `debug`: per-step detail (search matches, chart redraws)
//! - `trace`: unused
//!
//! `RUST_LOG` overrides the configured level unless a level was given on the
//! command line.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Crates whose events pass the configured level; everything else stays at
/// `warn`.
const OWN_CRATES: [&str; 6] = [
    "bjcp_cli",
    "bjcp_core",
    "bjcp_chart",
    "bjcp_ingest",
    "bjcp_model",
    "bjcp_report",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace `level_filter` when set.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    /// Include the module path of each event.
    pub with_target: bool,
    /// Emit span close events (JSON only).
    pub with_spans: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Write to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_spans: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_logging_with_writer(config, Mutex::new(file));
        }
        None => init_logging_with_writer(config, io::stderr),
    }
    Ok(())
}

/// Initialize logging with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(build_env_filter(config));
    match config.format {
        LogFormat::Json => {
            let span_events = if config.with_spans {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            };
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(writer)
                        .with_target(config.with_target)
                        .with_span_events(span_events),
                )
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            let layer = if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            };
            registry.with(layer).init();
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            let layer = if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            };
            registry.with(layer).init();
        }
    }
}

/// Filter directives for `level` on our crates, `warn` elsewhere.
#[must_use]
pub fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(OWN_CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}
