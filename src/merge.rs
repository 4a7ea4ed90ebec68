//! Deep structural merge and clone over JSON-like values.
//!
//! Structures are [`serde_json::Value`] trees, so the type branching the
//! engine performs is exhaustive pattern matching over the `Value` variants
//! rather than runtime inspection. Mappings are [`serde_json::Map`] and
//! iterate in ascending key order.
//!
//! Cyclic inputs are unrepresentable in `Value`; recursion depth is bounded
//! by the depth of the input structure.

use serde_json::{Map, Value};

/// Merge `additions` over `base`, left to right, returning a new mapping.
///
/// The caller's `base` is never modified. Additions that are not objects are
/// skipped entirely. For each key of an object addition:
///
/// - a null value leaves an existing non-null entry untouched;
/// - when both the accumulated entry and the addition's value are objects,
///   they merge recursively;
/// - otherwise the addition's value replaces the entry wholesale. Arrays are
///   treated as values here: they replace, never concatenate.
///
/// Later additions win ties, so addition order is significant.
///
/// # Examples
///
/// ```rust
/// use serde_json::{Value, json};
/// use sundry::merge;
///
/// let base = json!({"a": 1, "b": {"x": 1}});
/// let base = base.as_object().expect("object literal");
///
/// let merged = merge(base, &[json!({"b": {"y": 2}, "c": 3})]);
/// assert_eq!(
///     Value::Object(merged),
///     json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3})
/// );
///
/// // Null additions never clobber existing values; arrays always replace.
/// let merged = merge(base, &[json!({"a": null, "b": [1, 2]})]);
/// assert_eq!(Value::Object(merged), json!({"a": 1, "b": [1, 2]}));
/// ```
#[must_use]
pub fn merge(base: &Map<String, Value>, additions: &[Value]) -> Map<String, Value> {
    let mut merged = base.clone();
    for addition in additions {
        merge_into(&mut merged, addition);
    }
    merged
}

/// Apply a single `addition` to `target` in place.
///
/// This is the explicit in-place form of [`merge`]: the same per-key rules
/// apply, but the caller owns the accumulation target. Non-object additions
/// are a no-op.
///
/// # Examples
///
/// ```rust
/// use serde_json::{Value, json};
/// use sundry::merge_into;
///
/// let mut target = json!({"retries": 3}).as_object().expect("object").clone();
/// merge_into(&mut target, &json!({"timeout": 30}));
/// assert_eq!(Value::Object(target), json!({"retries": 3, "timeout": 30}));
/// ```
pub fn merge_into(target: &mut Map<String, Value>, addition: &Value) {
    let Value::Object(entries) = addition else {
        return;
    };
    for (key, value) in entries {
        let exists = target.get(key).is_some_and(|existing| !existing.is_null());
        if value.is_null() && exists {
            continue;
        }
        if value.is_object() {
            if let Some(Value::Object(existing)) = target.get_mut(key) {
                merge_into(existing, value);
                continue;
            }
        }
        target.insert(key.clone(), value.clone());
    }
}

/// Deep copy `value`, allocating fresh containers at every level.
///
/// Arrays are cloned element-wise, objects entry-wise, and primitives by
/// value, so no container in the output shares storage with the input.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use sundry::clone_value;
///
/// let original = json!({"tags": ["a", "b"], "nested": {"n": 1}});
/// let copy = clone_value(&original);
/// assert_eq!(copy, original);
/// ```
#[must_use]
pub fn clone_value(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(clone_value).collect()),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, nested)| (key.clone(), clone_value(nested)))
                .collect(),
        ),
        primitive => primitive.clone(),
    }
}
