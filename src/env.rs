//! Environment variable lookups with explicit absence handling.

use tracing::debug;

use crate::{SundryError, SundryResult};

/// Read an environment variable.
///
/// # Errors
///
/// Returns [`SundryError::Environment`] when the variable is unset (or not
/// valid Unicode).
pub fn var(key: &str) -> SundryResult<String> {
    std::env::var(key).map_err(|_| SundryError::Environment {
        key: key.to_owned(),
    })
}

/// Read an environment variable, falling back to `fallback` when unset.
///
/// # Examples
///
/// ```rust
/// use sundry::env::var_or;
///
/// assert_eq!(var_or("SUNDRY_DOCTEST_UNSET", "fallback"), "fallback");
/// ```
#[must_use]
pub fn var_or(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        debug!(key, fallback, "environment variable unset, using fallback");
        fallback.to_owned()
    })
}
