//! Source manifest (`package.json`) reading.

use crate::error::{Result, SyncError};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Reads the `version` field of a JSON manifest as an opaque string.
///
/// The value is not validated beyond being a JSON string: `"next"`, `""` and
/// `"1.0.0-beta+exp"` are all returned as-is.
///
/// # Errors
///
/// - `Read`: file missing or unreadable
/// - `Parse`: invalid JSON, or top level is not an object
/// - `MissingVersion`: no `version` key, or it is `null`
/// - `InvalidVersion`: `version` is a number, bool, array or object
pub fn read_version(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| SyncError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let manifest: Map<String, Value> =
        serde_json::from_str(text).map_err(|source| SyncError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    match manifest.get("version") {
        None | Some(Value::Null) => Err(SyncError::MissingVersion(path.to_path_buf())),
        Some(Value::String(version)) => {
            log::debug!("Read version {} from {}", version, path.display());
            Ok(version.clone())
        }
        Some(other) => Err(SyncError::InvalidVersion {
            path: path.to_path_buf(),
            found: json_type(other).to_string(),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
