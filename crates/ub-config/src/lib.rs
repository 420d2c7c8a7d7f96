mod config;
mod error;
mod log_level;
mod logging_config;
mod store_config;
mod view_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use store_config::{DEFAULT_READ_LATENCY_MS, DEFAULT_WRITE_LATENCY_MS, StoreConfig};
pub use view_config::{DEFAULT_LOADING_DELAY_MS, ViewConfig};

const CONFIG_DIR_ENV: &str = "UB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ub";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

/// Upper bound shared by every simulated delay, in milliseconds
const MAX_DELAY_MS: u64 = 10_000;
