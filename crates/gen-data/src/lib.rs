#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
//! Command line front ends that write kernel test data as assembly.

use ftlog::{LevelFilter, LoggerGuard};

pub mod commands;

/// Configures the logger.
///
/// Logs go to stderr so that stdout carries only the generated assembly.
///
/// # Errors
///
/// - If the logger could not be initialized.
pub fn configure_logger() -> Result<LoggerGuard, String> {
    ftlog::Builder::new()
        // global max log level
        .max_log_level(LevelFilter::Info)
        // no root appender given, so records are written to stderr
        .try_init()
        .map_err(|e| e.to_string())
}
