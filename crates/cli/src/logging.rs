// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "DICTATION_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";
const VERBOSE_DIRECTIVE: &str = "debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("ignoring invalid DICTATION_LOG filter '{directive}': {message}")]
    InvalidFilter { directive: String, message: String },

    #[error("failed to install logger: {0}")]
    Install(String),
}

/// Pick the filter: `--verbose` wins, then `DICTATION_LOG`, then `warn`.
pub fn build_filter(env_value: Option<&str>, verbose: bool) -> Result<EnvFilter, LoggingError> {
    if verbose {
        return Ok(EnvFilter::new(VERBOSE_DIRECTIVE));
    }
    match env_value.map(str::trim) {
        Some(directive) if !directive.is_empty() => {
            EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
                directive: directive.to_string(),
                message: e.to_string(),
            })
        }
        _ => Ok(EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

/// Install the global subscriber.
///
/// An invalid `DICTATION_LOG` value still installs the default filter; the
/// error is returned so the caller can warn about it.
pub fn init(verbose: bool) -> Result<(), LoggingError> {
    let env_value = std::env::var(LOG_ENV).ok();
    let (filter, filter_error) = match build_filter(env_value.as_deref(), verbose) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_DIRECTIVE), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    match filter_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
