//! Raw layout elements as delivered by the extraction service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Default placement reported when an element carries none.
pub const UNKNOWN_PLACEMENT: &str = "Unknown";

/// One flat layout-detection record.
///
/// Elements have no identity beyond their path. Ancestry is implicit in
/// path prefixing: `//Document/Table/TR/TD` is a descendant of
/// `//Document/Table`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Slash-delimited structural path
    #[serde(rename = "Path", alias = "path", default)]
    pub path: String,

    /// Page index (0-based)
    #[serde(rename = "Page", alias = "page", default)]
    pub page: u32,

    /// Text content, if any
    #[serde(
        rename = "Text",
        alias = "text",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,

    /// Bounds `[x0, y0, x1, y1]` in layout units
    #[serde(
        rename = "Bounds",
        alias = "bounds",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub bounds: Vec<f64>,

    /// Open attribute bag
    #[serde(default)]
    pub attributes: ElementAttributes,
}

impl Element {
    /// Create an element with a path on a page.
    pub fn new(path: impl Into<String>, page: u32) -> Self {
        Self {
            path: path.into(),
            page,
            ..Default::default()
        }
    }

    /// Set text and return self.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set bounds and return self.
    pub fn with_bounds(mut self, bounds: impl Into<Vec<f64>>) -> Self {
        self.bounds = bounds.into();
        self
    }

    /// Set attributes and return self.
    pub fn with_attributes(mut self, attributes: ElementAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Non-empty text content.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Typed view over an element's attribute bag.
///
/// Known keys are typed; anything else lands in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementAttributes {
    #[serde(rename = "BBox", default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,

    #[serde(
        rename = "Placement",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub placement: Option<String>,

    #[serde(rename = "RowIndex", default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,

    #[serde(rename = "ColIndex", default, skip_serializing_if = "Option::is_none")]
    pub col_index: Option<u32>,

    #[serde(rename = "NumRow", default, skip_serializing_if = "Option::is_none")]
    pub num_row: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ElementAttributes {
    /// Create an empty attribute bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes of a table cell at `(row, col)`.
    pub fn cell(row: u32, col: u32) -> Self {
        Self {
            row_index: Some(row),
            col_index: Some(col),
            ..Self::default()
        }
    }

    /// Set the bounding box and return self.
    pub fn with_bbox(mut self, bbox: impl Into<Vec<f64>>) -> Self {
        self.bbox = Some(bbox.into());
        self
    }

    /// Set the placement and return self.
    pub fn with_placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = Some(placement.into());
        self
    }

    /// Set the declared row count and return self.
    pub fn with_num_rows(mut self, rows: u32) -> Self {
        self.num_row = Some(rows);
        self
    }

    /// Row index of a table cell, defaulting to 0.
    pub fn row_index(&self) -> u32 {
        self.row_index.unwrap_or(0)
    }

    /// Column index of a table cell, defaulting to 0.
    pub fn col_index(&self) -> u32 {
        self.col_index.unwrap_or(0)
    }

    /// Bounding box, defaulting to an empty list.
    pub fn bbox(&self) -> Vec<f64> {
        self.bbox.clone().unwrap_or_default()
    }

    /// Placement, defaulting to `"Unknown"`.
    pub fn placement(&self) -> String {
        self.placement
            .clone()
            .unwrap_or_else(|| UNKNOWN_PLACEMENT.to_string())
    }

    /// Declared table row count, defaulting to 0.
    pub fn num_rows(&self) -> u32 {
        self.num_row.unwrap_or(0)
    }

    /// Look up an attribute that has no typed accessor.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Document-level metadata reported by the extraction service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedMetadata {
    /// Declared page count (validated before assembly)
    #[serde(default)]
    pub page_count: i64,

    /// PDF version (e.g., "1.7")
    #[serde(default)]
    pub pdf_version: String,

    /// Document language
    #[serde(default)]
    pub language: String,

    /// Extraction instance identifier, used as the extraction timestamp
    #[serde(rename = "ID_instance", default)]
    pub id_instance: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The full payload of one extraction job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawExtraction {
    /// Flat element list, in service order
    #[serde(default)]
    pub elements: Vec<Element>,

    /// Document-level metadata
    #[serde(default)]
    pub extended_metadata: ExtendedMetadata,
}

impl RawExtraction {
    /// Create a raw extraction from elements and a page count.
    pub fn new(elements: Vec<Element>, page_count: i64) -> Self {
        Self {
            elements,
            extended_metadata: ExtendedMetadata {
                page_count,
                ..Default::default()
            },
        }
    }

    /// Parse a raw extraction from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The declared page count, rejecting negative values.
    pub fn page_count(&self) -> Result<u32> {
        let count = self.extended_metadata.page_count;
        u32::try_from(count).map_err(|_| Error::InvalidPageCount(count))
    }
}
