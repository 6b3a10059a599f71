use serde_json::{Map, Value};

use crate::value::is_primitive;

/// Flatten a nested object into a single-level mapping whose keys are the
/// `.`-joined paths to each leaf.
pub fn flatten(source: &Value) -> Value {
    flatten_with(source, true)
}

/// Like [`flatten`], with control over key prefixing. Without prefixes,
/// colliding child keys from later siblings overwrite earlier ones.
pub fn flatten_with(source: &Value, prefix_keys: bool) -> Value {
    let Some(map) = source.as_object() else {
        // Non-containers pass through unchanged, arrays included.
        return source.clone();
    };
    let mut dst = Map::new();
    for (key, entry) in map {
        if is_primitive(entry) || entry.is_array() {
            dst.insert(key.clone(), entry.clone());
            continue;
        }
        // Nested container: hoist its flattened entries, re-keyed depth-first.
        if let Value::Object(inner) = flatten_with(entry, prefix_keys) {
            for (child_key, child_value) in inner {
                let dst_key = if prefix_keys {
                    format!("{key}.{child_key}")
                } else {
                    child_key
                };
                dst.insert(dst_key, child_value);
            }
        }
    }
    Value::Object(dst)
}
