//! Structured logging setup.
//!
//! Library code only emits `tracing` events; applications embedding this
//! crate decide whether to install a subscriber. [`init_logging`] installs
//! one writing to stderr, either human-readable or as JSON lines.

pub mod config;

pub use config::{LogConfig, LogFormat, LogLevel, LOG_FORMAT_ENV, LOG_LEVEL_ENV};

use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events the default filter lets through.
const LOG_TARGETS: [&str; 2] = ["rc_custom", "rc_convert"];

/// Filter directives for `config`, e.g. `rc_custom=info,rc_convert=info`.
pub fn filter_directives(config: &LogConfig) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={}", config.level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the event filter for `config`.
///
/// When `RC_LOG` is set the level from `config` is used. Otherwise valid
/// `RUST_LOG` directives take over, falling back to `config`.
pub fn env_filter(config: &LogConfig, lookup: impl Fn(&str) -> Option<String>) -> EnvFilter {
    if lookup(LOG_LEVEL_ENV).is_none() {
        if let Some(filter) = lookup("RUST_LOG").and_then(|d| EnvFilter::try_new(d).ok()) {
            return filter;
        }
    }
    EnvFilter::new(filter_directives(config))
}

/// Install a global subscriber.
///
/// Returns an error when a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = env_filter(config, |key| std::env::var(key).ok());

    match config.format {
        LogFormat::Human => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_ansi(std::io::stderr().is_terminal());

            if config.timestamps {
                tracing_subscriber::registry().with(filter).with(layer).try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Jsonl => {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_file(config.source_location)
                .with_line_number(config.source_location);
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
    }
}

/// Initialize logging from the environment, ignoring an already installed subscriber.
pub fn init_default_logging() {
    let _ = init_logging(&LogConfig::from_env());
}
