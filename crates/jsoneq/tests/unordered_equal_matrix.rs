//! Equivalence matrix: reflexivity, symmetry, kind mismatches, numbers,
//! unordered arrays and objects.

use jsoneq::{equivalent, JsonValue};
use serde_json::json;

fn eq(a: serde_json::Value, b: serde_json::Value) -> bool {
    let (a, b) = (JsonValue::from(a), JsonValue::from(b));
    let forward = equivalent(&a, &b);
    assert_eq!(forward, equivalent(&b, &a), "equivalence must be symmetric");
    forward
}

// ---------------------------------------------------------------------------
// Reflexivity
// ---------------------------------------------------------------------------

#[test]
fn reflexivity_scalars() {
    for v in [json!(null), json!(true), json!(0), json!(-2.5), json!("")] {
        assert!(eq(v.clone(), v));
    }
}

#[test]
fn reflexivity_complex_nested() {
    let v = json!({"complex": [1, 2, {"nested": true}], "more": [[], {}, [null]]});
    assert!(eq(v.clone(), v));
}

// ---------------------------------------------------------------------------
// Kind mismatches
// ---------------------------------------------------------------------------

#[test]
fn null_matches_only_null() {
    for other in [json!(0), json!(false), json!(""), json!([]), json!({})] {
        assert!(!eq(json!(null), other));
    }
}

#[test]
fn kind_mismatch_never_equal() {
    assert!(!eq(json!(1), json!(true)));
    assert!(!eq(json!(1), json!("1")));
    assert!(!eq(json!("a"), json!(["a"])));
    assert!(!eq(json!([1]), json!({})));
    assert!(!eq(json!({}), json!([])));
    assert!(!eq(json!(true), json!("true")));
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

#[test]
fn number_integer_and_float_equal() {
    assert!(eq(json!(0), json!(0.0)));
    assert!(eq(json!(-0.0), json!(0)));
    assert!(eq(json!(100), json!(1e2)));
}

#[test]
fn number_no_tolerance() {
    assert!(!eq(json!(1.5), json!(1.6)));
    assert!(!eq(json!(0.3), json!(0.1 + 0.2)));
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

#[test]
fn array_order_ignored() {
    assert!(eq(json!(["a", "b", 1, 2]), json!([2, "b", 1, "a"])));
    assert!(eq(json!([[1, 2], [3]]), json!([[3], [2, 1]])));
}

#[test]
fn array_multiplicity_respected() {
    assert!(!eq(json!([1, 1, 2]), json!([1, 2, 2])));
    assert!(!eq(json!([1, 1]), json!([1])));
    assert!(eq(json!([1, 2, 1]), json!([1, 1, 2])));
}

#[test]
fn array_different_element() {
    assert!(!eq(json!([1, 2, 3]), json!([1, 2, 4])));
}

#[test]
fn array_of_objects_in_any_order() {
    assert!(eq(
        json!(["foo", {"hello": "world", "nested": "hash"}]),
        json!([{"hello": "world", "nested": "hash"}, "foo"])
    ));
    assert!(!eq(
        json!([{"a": "a"}, {"b": "b"}]),
        json!([{"a": "a"}, {"b": "c"}])
    ));
}

#[test]
fn array_greedy_match_with_equivalent_members() {
    // Elements that are equivalent but not identical in the source text.
    assert!(eq(
        json!([{"k": [1, 2]}, {"k": [2, 1]}, {"k": [3]}]),
        json!([{"k": [3]}, {"k": [1, 2]}, {"k": [1, 2]}])
    ));
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

#[test]
fn object_key_order_ignored() {
    assert!(eq(json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1})));
}

#[test]
fn object_key_set_mismatch() {
    assert!(!eq(json!({"foo": "bar"}), json!({"foo": "bar", "hello": "world"})));
    assert!(!eq(json!({"a": 1}), json!({"b": 1})));
}

#[test]
fn object_value_mismatch() {
    assert!(!eq(json!({"a": {"b": {"c": 1}}}), json!({"a": {"b": {"c": 2}}})));
}

#[test]
fn hash_of_arrays_and_hashes() {
    let a = json!({
        "numeric": 1.5,
        "array": [{"foo": "bar"}, 1, "string", ["nested", "array", 5.5]],
        "hash": {"nested": "hash", "nested_slice": ["this", "is", "nested"]},
        "string": "foo"
    });
    let b = json!({
        "numeric": 1.5,
        "hash": {"nested": "hash", "nested_slice": ["nested", "this", "is"]},
        "string": "foo",
        "array": [["array", 5.5, "nested"], "string", 1, {"foo": "bar"}]
    });
    assert!(eq(a, b));
}
