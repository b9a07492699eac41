//! Logging setup for the command line client
//!
//! - Human-readable console output on stderr (stdout carries command output)
//! - Optional JSON log files with size and daily rotation

use anyhow::Result;
use rolling_file::{RollingConditionBasic, RollingFileAppender};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "tcannex=info,tcannex_rs=info";

/// Initialize tracing
///
/// When `log_dir` is given, returns a guard that must be kept alive to ensure
/// file logs are flushed.
pub fn init_telemetry(log_dir: Option<&Path>, verbose: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("tcannex=debug,tcannex_rs=debug")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    let Some(log_dir) = log_dir else {
        let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .try_init()?;
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)?;

    // tcannex.log, rotated daily or at 10MB, keeping up to 9 old files
    let file_appender = RollingFileAppender::new(
        log_dir.join("tcannex.log"),
        RollingConditionBasic::new()
            .daily()
            .max_size(10 * 1024 * 1024),
        9,
    )?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_current_span(true)
        .with_target(true);

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    tracing::debug!("File logging to {:?}", log_dir);
    Ok(Some(guard))
}
