use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Config;
use crate::error::{GeoError, Result};

/// Install the global subscriber: stdout always, plus a daily-rotated file when configured.
///
/// The returned guard flushes the file writer on drop and must be held until exit.
pub fn init_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    let level = if config.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let (file_layer, guard) = match &config.log {
        Some(path) => {
            let appender = file_appender(path, config.log_backups)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .with_filter(level);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_filter(level))
        .with(file_layer)
        .try_init()
        .map_err(|e| GeoError::Config(format!("failed to install logger: {}", e)))?;

    Ok(guard)
}

fn file_appender(path: &Path, backups: usize) -> Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("geo");

    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix);
    if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
        builder = builder.filename_suffix(ext);
    }
    if backups > 0 {
        builder = builder.max_log_files(backups);
    }

    builder
        .build(dir)
        .map_err(|e| GeoError::Config(format!("cannot open log file {}: {}", path.display(), e)))
}
