use crate::{ConfigError, ConfigErrorResult, MAX_DELAY_MS};

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_READ_LATENCY_MS: u64 = 500;
pub const DEFAULT_WRITE_LATENCY_MS: u64 = 300;

/// Simulated latency of the user store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Delay before a read resolves, in milliseconds
    pub read_latency_ms: u64,
    /// Delay before a create/update/delete resolves, in milliseconds
    pub write_latency_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            read_latency_ms: DEFAULT_READ_LATENCY_MS,
            write_latency_ms: DEFAULT_WRITE_LATENCY_MS,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.read_latency_ms > MAX_DELAY_MS {
            return Err(ConfigError::store(format!(
                "store.read_latency_ms must be 0-{}, got {}",
                MAX_DELAY_MS, self.read_latency_ms
            )));
        }

        if self.write_latency_ms > MAX_DELAY_MS {
            return Err(ConfigError::store(format!(
                "store.write_latency_ms must be 0-{}, got {}",
                MAX_DELAY_MS, self.write_latency_ms
            )));
        }

        Ok(())
    }

    pub fn read_latency(&self) -> Duration {
        Duration::from_millis(self.read_latency_ms)
    }

    pub fn write_latency(&self) -> Duration {
        Duration::from_millis(self.write_latency_ms)
    }
}
