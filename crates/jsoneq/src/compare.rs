//! Order-insensitive structural equivalence over [`JsonValue`] trees.
//!
//! Arrays compare as multisets: element order is ignored, multiplicity is
//! not. Objects compare by key set plus pairwise value equivalence.

use std::collections::HashMap;

use crate::value::JsonValue;

/// Returns `true` if `a` and `b` are equivalent JSON values.
///
/// Values of different kinds are never equivalent. Numbers compare with
/// `f64` equality.
///
/// # Examples
///
/// ```
/// use jsoneq::{decode, equivalent};
///
/// let a = decode(r#"["a", "b", 1, 2]"#).unwrap();
/// let b = decode(r#"[2, "b", 1, "a"]"#).unwrap();
/// assert!(equivalent(&a, &b));
/// ```
pub fn equivalent(a: &JsonValue, b: &JsonValue) -> bool {
    match a {
        JsonValue::Null => matches!(b, JsonValue::Null),
        JsonValue::Bool(x) => matches!(b, JsonValue::Bool(y) if x == y),
        JsonValue::Number(x) => matches!(b, JsonValue::Number(y) if x == y),
        JsonValue::String(x) => matches!(b, JsonValue::String(y) if x == y),
        JsonValue::Array(x) => match b {
            JsonValue::Array(y) => arrays_equivalent(x, y),
            _ => false,
        },
        JsonValue::Object(x) => match b {
            JsonValue::Object(y) => objects_equivalent(x, y),
            _ => false,
        },
    }
}

/// Returns `true` if `a` and `b` hold the same elements with the same
/// multiplicities, in any order.
///
/// Each element of `a` claims the first unclaimed element of `b` it is
/// equivalent to. Because [`equivalent`] is an equivalence relation, the
/// members of one class are interchangeable, so this greedy scan finds a
/// perfect matching whenever one exists.
pub fn arrays_equivalent(a: &[JsonValue], b: &[JsonValue]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    for (i, element) in a.iter().enumerate() {
        let found = b
            .iter()
            .enumerate()
            .position(|(j, candidate)| !used[j] && equivalent(candidate, element));
        match found {
            Some(j) => used[j] = true,
            None => {
                tracing::trace!(index = i, "array element has no unclaimed match");
                return false;
            }
        }
    }
    used.iter().all(|&claimed| claimed)
}

/// Returns `true` if `a` and `b` have the same key set and every shared key
/// maps to equivalent values.
pub fn objects_equivalent(
    a: &HashMap<String, JsonValue>,
    b: &HashMap<String, JsonValue>,
) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (key, val_a) in a {
        match b.get(key) {
            Some(val_b) => {
                if !equivalent(val_a, val_b) {
                    tracing::trace!(key = %key, "object values differ");
                    return false;
                }
            }
            None => {
                tracing::trace!(key = %key, "key missing from second object");
                return false;
            }
        }
    }
    // Every key of `b` must also be a key of `a`.
    b.keys().all(|key| a.contains_key(key))
}
