//! Logging configuration for PersonaLens

use std::path::Path;

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::config::AppConfig;
use crate::Result;

/// Initialize logging from the application configuration
pub fn init_logging_with_config(config: &AppConfig) -> Result<()> {
    init_logging_with_level(config.log_level(), config.log_dir())
}

/// Initialize logging with a custom level and optional log directory
///
/// Console output always goes to stderr so that JSON written to stdout stays
/// machine readable. When `log_dir` is set, a daily rolling file is added.
pub fn init_logging_with_level(level: &str, log_dir: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},personalens={level}")));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    let file_layer = match log_dir {
        Some(dir) => {
            if !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
            let file_appender = tracing_appender::rolling::daily(dir, "personalens.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            // The guard must outlive every log call; logging lasts for the process lifetime
            std::mem::forget(guard);
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| crate::PersonaError::Custom(format!("Failed to initialize logging: {e}")))?;

    tracing::debug!("Logging initialized with level: {}", level);
    if let Some(dir) = log_dir {
        tracing::debug!("Log files will be saved to: {}", dir.display());
    }

    Ok(())
}

/// Initialize simple logging for tests and tools
pub fn init_simple_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| crate::PersonaError::Custom(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}
