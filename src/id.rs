//! Random identifier generation.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length used by [`random_id_default`].
pub const DEFAULT_ID_SIZE: usize = 7;

/// Generate a random letter/number sequence of the given length.
///
/// # Examples
///
/// ```rust
/// use sundry::id::random_id;
///
/// let id = random_id(12);
/// assert_eq!(id.len(), 12);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[must_use]
pub fn random_id(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/// Generate a random identifier of the default length.
#[must_use]
pub fn random_id_default() -> String {
    random_id(DEFAULT_ID_SIZE)
}
