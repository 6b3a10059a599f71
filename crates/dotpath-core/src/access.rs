use serde_json::{Map, Value};

use crate::error::PathError;
use crate::value::{is_defined, is_plain_object};

/// Separator used by the convenience entry points.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Resolve a dot-delimited path against a value. Missing segments resolve to
/// `None`, never an error.
pub fn get_property<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
    get_property_with(source, path, DEFAULT_SEPARATOR)
}

pub fn get_property_with<'a>(source: &'a Value, path: &str, separator: &str) -> Option<&'a Value> {
    if !is_defined(source) {
        return None;
    }
    if path.is_empty() {
        return Some(source);
    }
    if separator.is_empty() || !path.contains(separator) {
        return source.get(path);
    }
    // Left fold: the first segment that fails to resolve pins the carry to
    // None for the rest of the path.
    path.split(separator)
        .try_fold(source, |carry, segment| carry.get(segment))
}

/// Write `value` at a dot-delimited path, creating missing intermediate
/// containers. A non-container intermediate is replaced with a fresh empty
/// container: the path is forced to exist, whatever was there is discarded.
pub fn set_property(source: &mut Value, path: &str, value: Value) {
    // Infallible: strict mode is the only failure source.
    set_property_with(source, path, value, false, DEFAULT_SEPARATOR).ok();
}

/// Write `value` at a dot-delimited path, failing with
/// [`PathError::PropertyNotFound`] on the first segment that names an
/// undeclared property instead of creating it.
pub fn set_property_strict(source: &mut Value, path: &str, value: Value) -> Result<(), PathError> {
    set_property_with(source, path, value, true, DEFAULT_SEPARATOR)
}

pub fn set_property_with(
    source: &mut Value,
    path: &str,
    value: Value,
    strict: bool,
    separator: &str,
) -> Result<(), PathError> {
    if path.is_empty() || !is_defined(source) {
        return Ok(());
    }
    if separator.is_empty() || !path.contains(separator) {
        return write_terminal(source, path, value, strict);
    }
    let segments: Vec<&str> = path.split(separator).collect();
    let (last, walk) = match segments.split_last() {
        Some(parts) => parts,
        None => return Ok(()),
    };
    let mut cursor = source;
    for segment in walk {
        // Empty segments (doubled or trailing separators) neither
        // materialize nor advance.
        if segment.is_empty() {
            continue;
        }
        if !cursor.get(segment).is_some_and(is_plain_object) {
            if strict {
                return Err(PathError::not_found(segment, cursor));
            }
            let Some(container) = cursor.as_object_mut() else {
                // Only a container can carry keys; the root keeps its
                // identity, so there is nothing to attach to.
                return Ok(());
            };
            if container.contains_key(*segment) {
                log::trace!("replacing non-container value at `{segment}` with an empty container");
            } else {
                log::trace!("materializing missing container at `{segment}`");
            }
            define_entry(container, segment, Value::Object(Map::new()));
        }
        cursor = match cursor.get_mut(segment) {
            Some(next) => next,
            None => return Ok(()),
        };
    }
    if last.is_empty() {
        return Ok(());
    }
    write_terminal(cursor, last, value, strict)
}

fn write_terminal(
    container: &mut Value,
    key: &str,
    value: Value,
    strict: bool,
) -> Result<(), PathError> {
    if strict {
        let declared = container.as_object().is_some_and(|map| map.contains_key(key));
        if !declared {
            return Err(PathError::not_found(key, container));
        }
    }
    if let Some(map) = container.as_object_mut() {
        define_entry(map, key, value);
    }
    Ok(())
}

// Shared write primitive for both the intermediate and terminal writes. The
// only attribute metadata a map entry carries is its enumeration position:
// overwriting keeps the existing slot in place, inserting appends a new entry
// immediately visible to enumeration.
pub(crate) fn define_entry(container: &mut Map<String, Value>, key: &str, value: Value) {
    match container.get_mut(key) {
        Some(slot) => *slot = value,
        None => {
            container.insert(key.to_string(), value);
        }
    }
}
