//! Input boundary: load raw roster records from a JSON file
//!
//! The file must hold a JSON array; each element is a raw record whose shape
//! the validator judges later. Anything other than an array at the top level
//! is an error here, because there is nothing to iterate.

use crate::error::{PairingError, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read a roster file and return its raw record values.
pub fn load_raw_records(path: &Path) -> Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path).map_err(|e| PairingError::InvalidInput {
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;
    let parsed: Value =
        serde_json::from_str(&contents).map_err(|e| PairingError::InvalidInput {
            reason: format!("{} is not valid JSON: {}", path.display(), e),
        })?;
    match parsed {
        Value::Array(records) => {
            debug!("loaded {} raw records from {}", records.len(), path.display());
            Ok(records)
        }
        other => Err(PairingError::InvalidInput {
            reason: format!(
                "{} must contain a JSON array of records, found {}",
                path.display(),
                json_type_name(&other)
            ),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
