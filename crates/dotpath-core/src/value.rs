// Value classification and copy helpers consumed by the accessor and the
// flattener. These delegate to serde_json's own representation rather than
// walking structures themselves.

use serde_json::Value;

/// True unless the value is the null sentinel.
pub fn is_defined(value: &Value) -> bool {
    !value.is_null()
}

/// True only for key/value containers; arrays are not plain objects.
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}

/// Scalar leaves: null, booleans, numbers, strings.
pub fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Keep `value` unless it is empty, otherwise take the lazily-built default.
pub fn default_if_empty(value: Value, default_with: impl FnOnce() -> Value) -> Value {
    if is_empty(&value) { default_with() } else { value }
}

/// Independent copy of a graph. `Value` holds its whole tree by value, so a
/// plain clone is already deep; mutating the copy never reaches the source.
pub fn deep_clone(value: &Value) -> Value {
    value.clone()
}
