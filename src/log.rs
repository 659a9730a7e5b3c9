// src/log.rs
//
// Thin layer over `tracing`: one init per frontend, and the short
// logf!/logd!/logw!/loge! macros used across the crate.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILE};

/// Where log lines go.
pub enum LogTarget<'a> {
    /// GUI: no console on release builds, so append to a file.
    File(&'a Path),
    /// CLI: stderr, so stdout stays clean for tables.
    Stderr,
}

impl Default for LogTarget<'_> {
    fn default() -> Self {
        LogTarget::File(Path::new(LOG_FILE))
    }
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { DEFAULT_LOG_FILTER })
    })
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(target: LogTarget<'_>, verbose: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_target(false);

    let res = match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    let _ = fs::create_dir_all(parent);
                }
            }
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init(),
                Err(_) => builder.with_writer(std::io::stderr).try_init(),
            }
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };
    // Already installed (tests, second frontend) is fine.
    let _ = res;
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
