use crate::error::{BoardError, Result as BoardErrorResult};

use std::fmt::Display;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// One log line: `[<rfc3339> - LEVEL] message [file:line]`
pub fn format_record(level: impl Display, record: &Record) -> String {
    format!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = record.args(),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    )
}

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
///
/// Console output goes to stderr so it never interleaves with board output.
pub fn initialize(
    log_level: ub_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> BoardErrorResult<()> {
    let level_filter = log_level.0;

    let base_dispatch = Dispatch::new().level(level_filter);

    let dispatch = if let Some(ref log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BoardError::Logger {
                message: format!(
                    "Failed to create log directory {}: {}",
                    parent.display(),
                    e
                ),
            })?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| BoardError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;

        // File output (no colors)
        Dispatch::new()
            .format(|out, _message, record| {
                out.finish(format_args!("{}", format_record(record.level(), record)))
            })
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, _message, record| {
                out.finish(format_args!(
                    "{}",
                    format_record(colors.color(record.level()), record)
                ))
            })
            .chain(std::io::stderr())
    } else {
        // Plain output for non-TTY
        Dispatch::new()
            .format(|out, _message, record| {
                out.finish(format_args!("{}", format_record(record.level(), record)))
            })
            .chain(std::io::stderr())
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| BoardError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}
