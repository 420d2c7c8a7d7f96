use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored level names on stderr; ignored when logging to a file
    pub colored: bool,
    /// Log file, relative to the config directory. None = stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Where log lines go: the configured file, or stderr.
    pub fn destination(&self) -> &str {
        self.file.as_deref().unwrap_or("stderr")
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref file) = self.file {
            if file.trim().is_empty() {
                return Err(ConfigError::logging("logging.file cannot be empty"));
            }
            if std::path::Path::new(file).is_absolute() || file.contains("..") {
                return Err(ConfigError::logging(
                    "logging.file must be relative and cannot contain '..'",
                ));
            }
        }
        Ok(())
    }
}
