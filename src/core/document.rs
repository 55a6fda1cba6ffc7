use crate::core::error::ValidateError;
use serde_json::Value;
use std::fs;

/// Read and parse the JSON document at `path`.
///
/// Any JSON value type is accepted at the root, not just objects: JSON
/// Schema constraints apply to top-level arrays and scalars as well.
pub fn load(path: &str) -> Result<Value, ValidateError> {
    let text = fs::read_to_string(path).map_err(|e| ValidateError::Document {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| ValidateError::Document {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
