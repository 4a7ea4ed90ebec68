//! Behavioural tests for the set utilities.

use std::collections::BTreeSet;

use sundry::{filter_set, find_in_set, map_set};

fn sample() -> BTreeSet<String> {
    ["one", "two", "three"].map(String::from).into_iter().collect()
}

#[test]
fn maps_set_values_in_ascending_order() {
    let set = sample();
    let mapped = map_set(&set, |item| format!("{item}x"));
    assert_eq!(mapped, ["onex", "threex", "twox"]);
}

#[test]
fn filters_without_mutating_the_input() {
    let set = sample();
    let kept = filter_set(&set, |item| item != "three");

    assert!(kept.contains("one"));
    assert!(kept.contains("two"));
    assert!(!kept.contains("three"));
    assert_eq!(set.len(), 3);
}

#[test]
fn finds_first_match_in_iteration_order() {
    let set = sample();
    assert_eq!(
        find_in_set(&set, |item| item == "one"),
        Some(&"one".to_owned())
    );
    assert_eq!(find_in_set(&set, |item| item == "ten"), None);
}

#[test]
fn find_prefers_the_smallest_match() {
    let set: BTreeSet<i32> = (1..10).collect();
    assert_eq!(find_in_set(&set, |n| n % 3 == 0), Some(&3));
}
