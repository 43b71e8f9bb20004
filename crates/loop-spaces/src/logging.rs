//! Tracing setup: human-readable output on stdout plus a daily JSON log file.

use crate::config::Config;

use std::path::PathBuf;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub(crate) const DEFAULT_FILTER: &str = "loop_spaces=debug,loop_spaces_core=debug";
const LOG_FILE_PREFIX: &str = "loop-spaces";
const LOG_FILE_SUFFIX: &str = "log";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default filter. The returned guard flushes the
/// file writer when dropped, so it must outlive the event loop. When the log
/// directory is unavailable only stdout logging is installed.
pub fn init() -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let appender = log_dir().and_then(|dir| {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX)
            .build(dir)
            .ok()
    });

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().json().with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn log_dir() -> Option<PathBuf> {
    Config::project_dirs()
        .ok()
        .map(|dirs| dirs.data_local_dir().join("logs"))
}
