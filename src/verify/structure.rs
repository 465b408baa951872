//! Structural checks against the document's own declared schema.
//!
//! Runs on untyped JSON so that missing keys stay visible; a typed
//! [`Document`] is serialized first.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::Document;

const REQUIRED_KEYS: [&str; 3] = ["document_id", "metadata", "pages"];
const REQUIRED_METADATA_KEYS: [&str; 2] = ["source", "page_count"];
const REQUIRED_PAGE_KEYS: [&str; 4] = ["page_number", "text", "tables", "images"];

/// Outcome of the structural check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureVerification {
    /// False iff any issue was found
    #[serde(rename = "structure_valid")]
    pub valid: bool,

    /// Every issue found, in check order
    pub issues: Vec<String>,

    /// Aggregate counts
    #[serde(rename = "structure_summary")]
    pub summary: StructureSummary,
}

/// Aggregate counts gathered during the structural check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSummary {
    pub total_pages: usize,
    pub total_tables: usize,
    pub total_images: usize,
    pub total_text_length: usize,
    pub pages_with_content: usize,
}

/// Check a typed document.
pub fn verify_document_structure(document: &Document) -> Result<StructureVerification> {
    verify_structure(&serde_json::to_value(document)?)
}

/// Check a document given as JSON.
///
/// Every check runs; failures accumulate in `issues`. Only a value that is
/// not a JSON object at all fails with [`Error::InvalidDocument`].
pub fn verify_structure(value: &Value) -> Result<StructureVerification> {
    let root = value
        .as_object()
        .ok_or_else(|| Error::InvalidDocument("document is not a JSON object".to_string()))?;
    let mut issues = Vec::new();

    for key in REQUIRED_KEYS {
        if !root.contains_key(key) {
            issues.push(format!("Missing required key: {}", key));
        }
    }

    let empty = Map::new();
    let metadata = match root.get("metadata") {
        Some(Value::Object(metadata)) => {
            for key in REQUIRED_METADATA_KEYS {
                if !metadata.contains_key(key) {
                    issues.push(format!("Missing metadata key: {}", key));
                }
            }
            metadata
        }
        Some(_) => {
            issues.push("Field metadata is not an object".to_string());
            &empty
        }
        None => &empty,
    };

    let pages: &[Value] = match root.get("pages") {
        Some(Value::Array(pages)) => pages,
        Some(_) => {
            issues.push("Field pages is not an array".to_string());
            &[]
        }
        None => &[],
    };

    let expected = metadata
        .get("page_count")
        .and_then(Value::as_i64)
        .unwrap_or(0);
    if expected != pages.len() as i64 {
        issues.push(format!(
            "Page count mismatch: expected {}, got {}",
            expected,
            pages.len()
        ));
    }

    for (i, page) in pages.iter().enumerate() {
        check_page(i + 1, page, &mut issues);
    }

    let valid = issues.is_empty();
    Ok(StructureVerification {
        valid,
        issues,
        summary: summarize(pages),
    })
}

fn check_page(page_num: usize, page: &Value, issues: &mut Vec<String>) {
    let Some(fields) = page.as_object() else {
        issues.push(format!("Page {}: Page is not an object", page_num));
        return;
    };

    for key in REQUIRED_PAGE_KEYS {
        if !fields.contains_key(key) {
            issues.push(format!("Page {}: Missing required key: {}", page_num, key));
        }
    }

    let number = fields.get("page_number");
    if number.and_then(Value::as_u64) != Some(page_num as u64) {
        issues.push(format!(
            "Page {}: Page number mismatch: expected {}, got {}",
            page_num,
            page_num,
            display_value(number)
        ));
    }

    for (j, table) in array_field(page, "tables").iter().enumerate() {
        let label = format!("t{}", j + 1);
        if !is_truthy(table.get("table_id")) {
            issues.push(format!("Page {}: Table {} missing table_id", page_num, label));
        }
        if !is_truthy(table.get("data")) {
            issues.push(format!("Page {}: Table {} missing data", page_num, label));
        }
    }

    for (j, image) in array_field(page, "images").iter().enumerate() {
        let label = format!("i{}", j + 1);
        if !is_truthy(image.get("image_id")) {
            issues.push(format!("Page {}: Image {} missing image_id", page_num, label));
        }
        if !is_truthy(image.get("path")) {
            issues.push(format!("Page {}: Image {} missing path", page_num, label));
        }
    }
}

/// Strings print without quotes, a missing value as `null`.
fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => Value::Null.to_string(),
    }
}

fn summarize(pages: &[Value]) -> StructureSummary {
    let text_of = |page: &Value| {
        page.get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .chars()
            .count()
    };

    StructureSummary {
        total_pages: pages.len(),
        total_tables: pages.iter().map(|p| array_field(p, "tables").len()).sum(),
        total_images: pages.iter().map(|p| array_field(p, "images").len()).sum(),
        total_text_length: pages.iter().map(text_of).sum(),
        pages_with_content: pages
            .iter()
            .filter(|p| {
                is_truthy(p.get("text")) || is_truthy(p.get("tables")) || is_truthy(p.get("images"))
            })
            .count(),
    }
}

fn array_field<'v>(value: &'v Value, key: &str) -> &'v [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// A field counts as present when it is set to a non-empty value.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}
