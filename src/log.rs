// src/log.rs
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_DIR, LOG_FILE};

static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the file subscriber (`.store/debug.log`). Safe to call more than once;
/// only the first call wins.
///
/// When the log file cannot be opened, warnings and errors go to stderr instead.
pub fn init() {
    if GUARD.get().is_some() {
        return;
    }

    let (writer, guard, default_level, unavailable) = match file_writer(Path::new(LOG_DIR), LOG_FILE) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (writer, guard, "info", None)
        }
        Err(e) => {
            let (writer, guard) = tracing_appender::non_blocking(io::stderr());
            (writer, guard, "warn", Some(e))
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        let _ = GUARD.set(guard);
        if let Some(e) = unavailable {
            tracing::warn!("no log file at {LOG_DIR}/{LOG_FILE} ({e}); logging to stderr");
        }
    }
}

/// Non-rotating appender for `dir/file`, creating `dir` first.
pub fn file_writer(dir: &Path, file: &str) -> io::Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file)
        .build(dir)
        .map_err(|e| io::Error::other(e.to_string()))
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

/// Warn-level logging
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
