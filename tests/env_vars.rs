//! Behavioural tests for environment lookups.
//!
//! These mutate process-wide state, so they run serially.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface malformed fixtures"
)]

use serial_test::serial;
use sundry::SundryError;
use sundry::env::{var, var_or};

const KEY: &str = "SUNDRY_TEST_VALUE";

#[test]
#[serial]
fn reads_an_existing_variable() {
    // SAFETY: `#[serial]` keeps environment mutation single-threaded.
    unsafe { std::env::set_var(KEY, "present") };
    assert_eq!(var(KEY).expect("variable was just set"), "present");
    unsafe { std::env::remove_var(KEY) };
}

#[test]
#[serial]
fn missing_variable_is_an_error() {
    unsafe { std::env::remove_var(KEY) };
    let result = var(KEY);
    assert!(matches!(result, Err(SundryError::Environment { ref key }) if key == KEY));
}

#[test]
#[serial]
fn fallback_covers_missing_variable() {
    unsafe { std::env::remove_var(KEY) };
    assert_eq!(var_or(KEY, "alternate"), "alternate");

    unsafe { std::env::set_var(KEY, "actual") };
    assert_eq!(var_or(KEY, "alternate"), "actual");
    unsafe { std::env::remove_var(KEY) };
}
