use std::time::Duration;

use ub_config::{DEFAULT_READ_LATENCY_MS, DEFAULT_WRITE_LATENCY_MS, StoreConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLatency {
    pub read: Duration,
    pub write: Duration,
}

impl StoreLatency {
    /// No delay at all; handy for tests.
    pub const NONE: StoreLatency = StoreLatency {
        read: Duration::ZERO,
        write: Duration::ZERO,
    };
}

impl Default for StoreLatency {
    fn default() -> Self {
        Self {
            read: Duration::from_millis(DEFAULT_READ_LATENCY_MS),
            write: Duration::from_millis(DEFAULT_WRITE_LATENCY_MS),
        }
    }
}

impl From<&StoreConfig> for StoreLatency {
    fn from(config: &StoreConfig) -> Self {
        Self {
            read: config.read_latency(),
            write: config.write_latency(),
        }
    }
}
