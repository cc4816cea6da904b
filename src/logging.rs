//! Logging setup.
//!
//! The interactive game owns stdout, so it only logs when a log directory is
//! configured, through a non-blocking daily file appender. Headless runs print
//! snapshots on stdout and log to stderr.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub const LOG_FILE_PREFIX: &str = "mini-tetris.log";

fn env_filter(config: &Config) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter: {}", config.log_filter))
}

/// Install the file logger for interactive play.
///
/// Returns `None` when no log directory is configured. Keep the guard alive
/// for the whole run; dropping it flushes pending lines.
pub fn init_file(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(dir) = config.log_dir.as_ref() else {
        return Ok(None);
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(layer)
        .try_init()
        .context("failed to install logger")?;

    tracing::info!(dir = %dir.display(), filter = %config.log_filter, "file logging initialized");
    Ok(Some(guard))
}

/// Install a stderr logger for headless runs.
pub fn init_stderr(config: &Config) -> Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(layer)
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_reports_bad_directives() {
        let mut config = Config::default();
        assert!(env_filter(&config).is_ok());

        config.log_filter = "mini_tetris=loud".to_string();
        let err = env_filter(&config).unwrap_err();
        assert!(err.to_string().contains("mini_tetris=loud"));
    }
}
