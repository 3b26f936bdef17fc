//! JSON Schema validation for response items.
//!
//! # Design
//! The schema document is reloaded from disk on every call, matching how the
//! suite treats schemas as external fixtures rather than compiled-in
//! constants. On mismatch the error carries every validator message, so a
//! failed assertion shows exactly which keywords were violated.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::ClientError;

/// Validate `instance` against the JSON Schema document at `schema_path`.
pub fn validate(instance: &Value, schema_path: impl AsRef<Path>) -> Result<(), ClientError> {
    let path = schema_path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| ClientError::File {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let schema: Value = serde_json::from_str(&raw).map_err(|e| ClientError::File {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let validator = jsonschema::validator_for(&schema).map_err(|e| ClientError::Schema {
        path: path.display().to_string(),
        messages: vec![e.to_string()],
    })?;
    let messages: Vec<String> = validator.iter_errors(instance).map(|e| e.to_string()).collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(ClientError::Schema {
            path: path.display().to_string(),
            messages,
        })
    }
}
