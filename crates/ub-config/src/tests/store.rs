use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Store
// =========================================================================

#[test]
#[serial]
fn given_read_latency_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _read = EnvGuard::set("UB_STORE_READ_LATENCY_MS", "10001");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_write_latency_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _write = EnvGuard::set("UB_STORE_WRITE_LATENCY_MS", "60000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_zero_latencies_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _read = EnvGuard::set("UB_STORE_READ_LATENCY_MS", "0");
    let _write = EnvGuard::set("UB_STORE_WRITE_LATENCY_MS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
    assert_eq!(config.store.read_latency(), Duration::ZERO);
    assert_eq!(config.store.write_latency(), Duration::ZERO);
}
