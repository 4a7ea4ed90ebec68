//! Set helpers over [`BTreeSet`].
//!
//! Sets iterate in ascending element order, so that is the documented order
//! for [`map_set`] output and [`find_in_set`] matching. None of these
//! operations mutate their input.

use std::collections::BTreeSet;

/// Map each set element through `f`, producing an ordered sequence.
///
/// Output order follows the set's iteration order (ascending).
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use sundry::map_set;
///
/// let set = BTreeSet::from(["one", "two", "three"]);
/// let mapped = map_set(&set, |item| format!("{item}x"));
/// assert_eq!(mapped, ["onex", "threex", "twox"]);
/// ```
#[must_use]
pub fn map_set<T, U, F>(set: &BTreeSet<T>, f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    set.iter().map(f).collect()
}

/// Produce a new set holding only the elements satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use sundry::filter_set;
///
/// let set = BTreeSet::from(["one", "two", "three"]);
/// let kept = filter_set(&set, |item| *item != "three");
/// assert!(kept.contains("one") && kept.contains("two"));
/// assert!(!kept.contains("three"));
/// ```
#[must_use]
pub fn filter_set<T, F>(set: &BTreeSet<T>, mut predicate: F) -> BTreeSet<T>
where
    T: Ord + Clone,
    F: FnMut(&T) -> bool,
{
    let mut filtered = BTreeSet::new();
    for item in set {
        if predicate(item) {
            filtered.insert(item.clone());
        }
    }
    filtered
}

/// Find the first element (in iteration order) satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use sundry::find_in_set;
///
/// let set = BTreeSet::from(["one", "two", "three"]);
/// assert_eq!(find_in_set(&set, |item| *item == "one"), Some(&"one"));
/// assert_eq!(find_in_set(&set, |item| *item == "ten"), None);
/// ```
#[must_use]
pub fn find_in_set<T, F>(set: &BTreeSet<T>, mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    for item in set {
        if predicate(item) {
            return Some(item);
        }
    }
    None
}
