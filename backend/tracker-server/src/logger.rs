use crate::error::{Result as ServerErrorResult, ServerError};

use tracker_config::LogLevel;

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

/// Install the global fern logger.
///
/// `log_file` of `None` writes to stdout. Colors apply to stdout only.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let colors = (colored && log_file.is_none()).then(level_colors);

    let output: fern::Output = match log_file {
        Some(ref path) => open_log_file(path)?.into(),
        None => std::io::stdout().into(),
    };

    Dispatch::new()
        .level(log_level.0)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .format(move |out, message, record| {
            let level = match colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                level,
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logging at {} to {}", log_level.0, path.display()),
        None => info!("Logging at {} to stdout", log_level.0),
    }

    // sqlx emits tracing events
    tracing_log::LogTracer::init().ok();

    Ok(())
}
