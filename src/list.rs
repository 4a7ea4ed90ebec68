//! Sequence helpers: membership, difference, equality, and picking.
//!
//! Operations are generic over the element type with `PartialEq` equality.
//! Nullable arguments from the original contracts travel as [`Option`]
//! parameters, and not-found sentinels come back as [`Option`] returns.
//! The two mutating operations, [`remove_item`] and [`add_unique`], take the
//! sequence by mutable reference and report what changed; everything else
//! leaves its inputs untouched.

use rand::seq::SliceRandom;
use serde_json::{Map, Value};

/// Remove the first occurrence of `item` from `list` in place.
///
/// Returns `true` when an element was removed, `false` when `item` was not
/// found (in which case the list is untouched).
///
/// # Examples
///
/// ```rust
/// use sundry::remove_item;
///
/// let mut list = vec!["one", "two"];
/// assert!(remove_item(&mut list, &"one"));
/// assert!(!remove_item(&mut list, &"three"));
/// assert_eq!(list, vec!["two"]);
/// ```
pub fn remove_item<T: PartialEq>(list: &mut Vec<T>, item: &T) -> bool {
    match list.iter().position(|candidate| candidate == item) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

/// Append each of `items` to `list` unless already present.
///
/// Returns the number of items actually appended. Duplicates within `items`
/// are only appended once, since each append updates the membership check
/// for the next.
///
/// # Examples
///
/// ```rust
/// use sundry::add_unique;
///
/// let mut list = vec!["one", "two", "three"];
/// assert_eq!(add_unique(&mut list, ["one"]), 0);
/// assert_eq!(add_unique(&mut list, ["four", "four", "five"]), 2);
/// assert_eq!(list.len(), 5);
/// ```
pub fn add_unique<T, I>(list: &mut Vec<T>, items: I) -> usize
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut appended = 0;
    for item in items {
        if !list.contains(&item) {
            list.push(item);
            appended += 1;
        }
    }
    appended
}

/// Order-independent equality between two optional slices.
///
/// `true` only when both sides are present, the lengths match, and every
/// element of `a` occurs somewhere in `b`. Duplicate counts beyond the
/// length check are not reconciled. Either side being `None` yields `false`.
///
/// # Examples
///
/// ```rust
/// use sundry::is_equal_list;
///
/// let list = ["one", "two", "three"];
/// assert!(is_equal_list(Some(list.as_slice()), Some(["one", "three", "two"].as_slice())));
/// assert!(!is_equal_list(Some(list.as_slice()), Some(["one", "three"].as_slice())));
/// assert!(!is_equal_list(Some(list.as_slice()), None));
/// ```
#[must_use]
pub fn is_equal_list<T: PartialEq>(a: Option<&[T]>, b: Option<&[T]>) -> bool {
    match (a, b) {
        (Some(left), Some(right)) => {
            left.len() == right.len() && left.iter().all(|item| right.contains(item))
        }
        _ => false,
    }
}

/// Symmetric difference between `a` and `b`.
///
/// Elements found in exactly one of the two slices, with the ones unique to
/// `a` first (in `a`'s order) followed by the ones unique to `b` (in `b`'s
/// order). A `None` for `b` returns all of `a`.
///
/// # Examples
///
/// ```rust
/// use sundry::list_difference;
///
/// let list = ["one", "two", "three"];
/// assert_eq!(list_difference(&list, Some(["one", "three"].as_slice())), ["two"]);
/// assert_eq!(list_difference(&list, None), list);
/// ```
#[must_use]
pub fn list_difference<T: PartialEq + Clone>(a: &[T], b: Option<&[T]>) -> Vec<T> {
    let Some(other) = b else {
        return a.to_vec();
    };
    let mut difference: Vec<T> = a
        .iter()
        .filter(|item| !other.contains(item))
        .cloned()
        .collect();
    difference.extend(other.iter().filter(|item| !a.contains(item)).cloned());
    difference
}

/// Whether `haystack` contains every one of `needles`.
///
/// An empty needle list is vacuously true.
#[must_use]
pub fn includes_all<T: PartialEq>(haystack: &[T], needles: &[T]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle))
}

/// Whether `a` and `b` share at least one element.
///
/// Empty inputs never intersect.
///
/// # Examples
///
/// ```rust
/// use sundry::intersects;
///
/// assert!(intersects(&[1], &[4, 5, 1]));
/// assert!(!intersects(&[1, 3], &[4, 5]));
/// ```
#[must_use]
pub fn intersects<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.iter().any(|item| b.contains(item))
}

/// Return a uniformly shuffled copy of `list`.
///
/// Uses the Fisher–Yates shuffle from [`rand`]. The input is never mutated,
/// and a `None` input comes straight back as `None`.
#[must_use]
pub fn shuffle<T: Clone>(list: Option<&[T]>) -> Option<Vec<T>> {
    list.map(|items| {
        let mut shuffled = items.to_vec();
        shuffled.shuffle(&mut rand::thread_rng());
        shuffled
    })
}

/// Reduce a value to a single element.
///
/// Non-array values come back unchanged. Arrays yield their first element,
/// or their last when `from_end` is set; an empty array yields `None`.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use sundry::unlist;
///
/// assert_eq!(unlist(&json!("two"), false), Some(&json!("two")));
/// assert_eq!(unlist(&json!([1, 2, 3, 4]), false), Some(&json!(1)));
/// assert_eq!(unlist(&json!([1, 2, 3, 4]), true), Some(&json!(4)));
/// assert_eq!(unlist(&json!([]), false), None);
/// ```
#[must_use]
pub fn unlist(value: &Value, from_end: bool) -> Option<&Value> {
    match value {
        Value::Array(items) => {
            if from_end {
                items.last()
            } else {
                items.first()
            }
        }
        other => Some(other),
    }
}

/// Invoke `f` once per entry of `mapping`, in ascending key order.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use sundry::for_each_key_value;
///
/// let data = json!({"one": 1, "two": 2});
/// let mut seen = Vec::new();
/// for_each_key_value(data.as_object().expect("object"), |key, value| {
///     seen.push(format!("{key}={value}"));
/// });
/// assert_eq!(seen, ["one=1", "two=2"]);
/// ```
pub fn for_each_key_value<F>(mapping: &Map<String, Value>, mut f: F)
where
    F: FnMut(&str, &Value),
{
    for (key, value) in mapping {
        f(key, value);
    }
}
