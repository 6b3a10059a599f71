use serde_json::Value;
use thiserror::Error;

/// Failures raised by strict-mode writes. Non-strict operations never fail:
/// missing values read back as `None` and missing containers are created.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("property `{property}` not found in container: {container}")]
    PropertyNotFound {
        /// The path segment that had no declared property.
        property: String,
        /// Compact JSON snapshot of the container that was missing it.
        container: String,
    },
}

impl PathError {
    pub(crate) fn not_found(property: &str, container: &Value) -> Self {
        PathError::PropertyNotFound {
            property: property.to_string(),
            container: container.to_string(),
        }
    }
}
