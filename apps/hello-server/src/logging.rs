//! Tracing subscriber setup
//!
//! Filter precedence: `RUST_LOG`, then `-v` count, then `logging.level`.
//! Logs go to stderr so that stdout stays clean for command output.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Directive derived from the `-v` count, falling back to the configured level.
#[must_use]
pub fn filter_directive(cfg: &LoggingConfig, verbose: u8) -> &str {
    match verbose {
        0 => &cfg.level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// A set `RUST_LOG` wins and must parse; otherwise `-v` or the configured level applies.
///
/// # Errors
/// Returns an error naming the source of an invalid directive.
pub fn resolve_filter(
    rust_log: Option<&str>,
    cfg: &LoggingConfig,
    verbose: u8,
) -> Result<EnvFilter> {
    match rust_log {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {} filter '{directives}'", EnvFilter::DEFAULT_ENV)),
        None => {
            let directive = filter_directive(cfg, verbose);
            EnvFilter::try_new(directive)
                .with_context(|| format!("invalid log filter '{directive}'"))
        }
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Returns an error if the directive is invalid or a subscriber is already set.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty());
    let filter = resolve_filter(rust_log.as_deref(), cfg, verbose)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match cfg.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
