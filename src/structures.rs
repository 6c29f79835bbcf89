//! Small container helpers that return new collections instead of mutating.

use serde_yaml::Value;

use crate::error::{Error, Result};

/// `[0, 1, .., length - 1]`.
pub fn create_array_from_length(length: usize) -> Vec<usize> {
    (0..length).collect()
}

/// Copy of `items` with `element` inserted at `index` (`0..=len`).
pub fn insert_in_array<T: Clone>(items: &[T], element: T, index: usize) -> Result<Vec<T>> {
    if index > items.len() {
        return Err(Error::Bounds {
            index,
            len: items.len(),
        });
    }
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(&items[..index]);
    out.push(element);
    out.extend_from_slice(&items[index..]);
    Ok(out)
}

/// Copy of `items` with the element at `from` moved to `to`.
///
/// Both indices must be `< len`.
pub fn move_in_array<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(Error::Bounds { index, len });
        }
    }
    let mut out = items.to_vec();
    let element = out.remove(from);
    out.insert(to, element);
    Ok(out)
}

/// Keys of a YAML mapping, in document order.
///
/// Scalar keys are rendered as text; non-scalar keys are skipped.
pub fn object_keys(value: &Value) -> Result<Vec<String>> {
    let mapping = match value {
        Value::Mapping(m) => m,
        Value::Null => return Err(Error::NullContainer),
        other => {
            return Err(Error::NotAnObject {
                found: describe(other).to_string(),
            })
        }
    };
    Ok(mapping.keys().filter_map(scalar_text).collect())
}

fn scalar_text(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
