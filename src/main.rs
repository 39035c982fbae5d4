//! Wardbook: in-memory hospital patient registry.
//!
//! Main entry point for the console application.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wardbook::adapters::sanitize::SanitizingMakeWriter;
use wardbook::config::{LogConfig, LogSink, DEFAULT_LOG_FILTER};
use wardbook::shell::{Console, Shell};
use wardbook::{RegistryService, SessionGate};

/// Install the global subscriber. Stdout is the console UI, so logs only ever
/// go to stderr or a file.
fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let (writer, guard) = match &config.sink {
        LogSink::Off => return Ok(None),
        LogSink::Stderr => tracing_appender::non_blocking(std::io::stderr()),
        LogSink::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                // Best-effort: the open below reports the real failure.
                let _ = std::fs::create_dir_all(parent);
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_appender::non_blocking(file)
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(SanitizingMakeWriter::new(writer)),
        )
        .init();

    Ok(Some(guard))
}

fn main() -> Result<()> {
    let log_config = LogConfig::from_env();
    let _guard = init_logging(&log_config)?;

    tracing::info!(sink = ?log_config.sink, "Starting Wardbook...");

    // Composition root: one gate and one registry for the whole process
    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let mut shell = Shell::new(console, SessionGate::new(), RegistryService::in_memory());

    // anyhow reports the fatal error on stderr
    shell.run().context("Console session terminated")
}
