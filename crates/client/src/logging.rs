//! Tracing setup for the terminal client.
//!
//! Everything goes to a log file; only warnings reach stderr so the prompt
//! stays readable.

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

/// Setup logging to both stderr and file
pub fn setup_logging(config: &CliConfig) -> Result<()> {
    let log_dir = config.log_dir.clone().unwrap_or_else(log_directory);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "guild.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!("Log file: {}", log_dir.join("guild.log").display());
    Ok(())
}

/// Get the platform-specific log directory
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "guild")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("guild").join("logs"))
}
