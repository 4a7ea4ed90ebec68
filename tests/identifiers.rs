//! Behavioural tests for random identifier generation.

use sundry::id::{DEFAULT_ID_SIZE, random_id, random_id_default};

#[test]
fn generates_alphanumeric_ids_of_requested_length() {
    let id = random_id(24);
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(random_id(0), "");
}

#[test]
fn default_length_matches_constant() {
    assert_eq!(random_id_default().len(), DEFAULT_ID_SIZE);
}

#[test]
fn consecutive_ids_differ() {
    // 62^24 outcomes; a collision here means the generator is broken.
    assert_ne!(random_id(24), random_id(24));
}
