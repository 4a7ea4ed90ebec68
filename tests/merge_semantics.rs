//! Behavioural tests for the deep merge and clone engine.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface malformed fixtures"
)]

use serde_json::{Map, Value, json};
use sundry::{clone_value, merge, merge_into};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().expect("test literal is an object").clone()
}

#[test]
fn empty_addition_list_yields_structural_copy() {
    let base = object(json!({"a": 1, "b": {"x": [1, 2]}}));
    let merged = merge(&base, &[]);
    assert_eq!(merged, base);
}

#[test]
fn merging_empty_object_changes_nothing() {
    let base = object(json!({"a": 1, "b": {"x": 1}}));
    let merged = merge(&base, &[json!({})]);
    assert_eq!(merged, base);
}

#[test]
fn null_keeps_existing_value_but_fills_missing_key() {
    let base = object(json!({"kept": "value"}));
    let merged = merge(&base, &[json!({"kept": null, "missing": null})]);
    assert_eq!(
        Value::Object(merged),
        json!({"kept": "value", "missing": null})
    );
}

#[test]
fn objects_merge_recursively() {
    let base = object(json!({"a": {"x": 1}}));
    let merged = merge(&base, &[json!({"a": {"y": 2}})]);
    assert_eq!(Value::Object(merged), json!({"a": {"x": 1, "y": 2}}));
}

#[test]
fn arrays_replace_rather_than_concatenate() {
    let base = object(json!({"a": [1, 2]}));
    let merged = merge(&base, &[json!({"a": [3]})]);
    assert_eq!(Value::Object(merged), json!({"a": [3]}));
}

#[test]
fn later_additions_win_ties() {
    let base = object(json!({"k": 0}));
    let merged = merge(&base, &[json!({"k": 1, "only": "first"}), json!({"k": 2})]);
    assert_eq!(Value::Object(merged), json!({"k": 2, "only": "first"}));
}

#[test]
fn later_null_does_not_clobber_earlier_addition() {
    let base = object(json!({}));
    let merged = merge(&base, &[json!({"k": 1}), json!({"k": null})]);
    assert_eq!(Value::Object(merged), json!({"k": 1}));
}

#[test]
fn deep_merge_spans_several_levels() {
    let base = object(json!({"a": {"b": {"c": 1}, "keep": true}}));
    let merged = merge(&base, &[json!({"a": {"b": {"d": 2}}})]);
    assert_eq!(
        Value::Object(merged),
        json!({"a": {"b": {"c": 1, "d": 2}, "keep": true}})
    );
}

#[test]
fn base_argument_is_never_modified() {
    let base = object(json!({"a": {"x": 1}}));
    let snapshot = base.clone();
    let _merged = merge(&base, &[json!({"a": {"x": 2}, "b": 3})]);
    assert_eq!(base, snapshot);
}

#[test]
fn merge_into_ignores_non_object_additions() {
    let mut target = object(json!({"a": 1}));
    let snapshot = target.clone();
    merge_into(&mut target, &json!([1, 2, 3]));
    merge_into(&mut target, &json!("text"));
    merge_into(&mut target, &Value::Null);
    assert_eq!(target, snapshot);
}

#[test]
fn clone_matches_source_for_structural_values() {
    let original = json!({
        "name": "trail",
        "tags": ["gpx", "map"],
        "nested": {"count": 3, "flags": [true, null]}
    });
    assert_eq!(clone_value(&original), original);
}

#[test]
fn mutating_the_clone_leaves_the_source_alone() {
    let original = json!({"nested": {"items": [1, 2]}});
    let snapshot = original.clone();

    let mut copy = clone_value(&original);
    if let Some(items) = copy
        .get_mut("nested")
        .and_then(|nested| nested.get_mut("items"))
        .and_then(Value::as_array_mut)
    {
        items.push(json!(3));
    }

    assert_eq!(original, snapshot);
    assert_ne!(copy, original);
}

#[test]
fn clone_preserves_null_entries() {
    let original = json!({"present": 1, "absent": null});
    assert_eq!(clone_value(&original), original);
}
