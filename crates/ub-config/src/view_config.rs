use crate::{ConfigError, ConfigErrorResult, MAX_DELAY_MS};

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_LOADING_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// How long the board reports itself as loading after start-up
    pub loading_delay_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.loading_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::view(format!(
                "view.loading_delay_ms must be 0-{}, got {}",
                MAX_DELAY_MS, self.loading_delay_ms
            )));
        }
        Ok(())
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}
