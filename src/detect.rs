//! Input format detection for JSON payloads.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Kind of JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Flat element list from the extraction service (`elements` key)
    RawExtraction,
    /// Page-indexed document (`pages` key)
    Document,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::RawExtraction => write!(f, "raw extraction"),
            InputKind::Document => write!(f, "document"),
        }
    }
}

/// Detect the kind of a parsed JSON payload.
///
/// # Returns
/// * `Ok(InputKind)` if the value is an object with `elements` or `pages`
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_kind(value: &Value) -> Result<InputKind> {
    let object = value.as_object().ok_or(Error::UnknownFormat)?;

    if object.get("elements").is_some_and(Value::is_array) {
        Ok(InputKind::RawExtraction)
    } else if object.contains_key("pages") {
        Ok(InputKind::Document)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Read a JSON file and detect its kind.
///
/// Returns the parsed value alongside the kind so callers do not parse twice.
///
/// # Example
/// ```no_run
/// use docstruct::detect::detect_kind_from_path;
///
/// let (kind, _value) = detect_kind_from_path("structuredData.json").unwrap();
/// println!("Input is a {}", kind);
/// ```
pub fn detect_kind_from_path<P: AsRef<Path>>(path: P) -> Result<(InputKind, Value)> {
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;
    let kind = detect_kind(&value)?;
    Ok((kind, value))
}
