//! Logging configuration from the environment.
//!
//! Stdout carries the console menu, so logs go to stderr or a file:
//! - `WARDBOOK_LOG_MODE`: `stderr` (default), `file` or `off`
//! - `WARDBOOK_LOG_FILE`: log path in `file` mode (default `wardbook.log`)
//! - `RUST_LOG`: filter directives (default `warn`)

use std::path::PathBuf;

pub const LOG_MODE_ENV: &str = "WARDBOOK_LOG_MODE";
pub const LOG_FILE_ENV: &str = "WARDBOOK_LOG_FILE";
pub const DEFAULT_LOG_FILE: &str = "wardbook.log";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Where formatted log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
    Off,
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub sink: LogSink,
}

impl LogConfig {
    /// Read the settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(LOG_MODE_ENV).ok().as_deref(),
            std::env::var(LOG_FILE_ENV).ok().as_deref(),
        )
    }

    /// Resolve settings from raw variable values. Unknown modes fall back to stderr.
    #[must_use]
    pub fn from_values(mode: Option<&str>, file: Option<&str>) -> Self {
        let sink = match mode.map(|m| m.trim().to_ascii_lowercase()).as_deref() {
            Some("file") => {
                let path = file
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .unwrap_or(DEFAULT_LOG_FILE);
                LogSink::File(PathBuf::from(path))
            }
            Some("off") | Some("none") => LogSink::Off,
            _ => LogSink::Stderr,
        };
        Self { sink }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            sink: LogSink::Stderr,
        }
    }
}
