//! dotpath-core: dot-path access, mutation, and flattening for dynamic JSON values
//!
//! This crate focuses on a small, well-factored surface:
//! - Path read/write over `serde_json::Value` with a configurable separator
//! - Missing intermediate containers materialized on write, or rejected in strict mode
//! - Flattening of nested objects into single-level dotted mappings
//! - Value predicates and copy helpers shared by both entry points
//!
pub mod access;
pub mod error;
pub mod flatten;
pub mod value;

pub use access::{
    DEFAULT_SEPARATOR, get_property, get_property_with, set_property, set_property_strict,
    set_property_with,
};
pub use error::PathError;
pub use flatten::{flatten, flatten_with};
pub use value::{
    deep_clone, default_if_empty, is_defined, is_empty, is_plain_object, is_primitive,
};
