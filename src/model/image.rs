//! Image records with inferred captions.

use serde::{Deserialize, Serialize};

use crate::geometry::has_box;

/// A figure found on a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image identifier, unique per page (`i1`, `i2`, ...)
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub image_id: String,

    /// Output location of the image (not the element path)
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub path: String,

    /// Caption text picked from nearby paragraphs
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub caption: Option<String>,

    /// Bounds reported for the figure element
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub bounds: Vec<f64>,

    /// Bounding box from the element attributes
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub bbox: Vec<f64>,

    /// Placement reported by the extraction service
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub placement: String,
}

impl Image {
    /// Create a new image record.
    pub fn new(image_id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            image_id: image_id.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Output location for an image on a page (1-indexed page number).
    pub fn output_path(page_number: u32, image_id: &str) -> String {
        format!("images/page{}_{}.png", page_number, image_id)
    }

    /// Set the caption and return self.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set bounds and return self.
    pub fn with_bounds(mut self, bounds: impl Into<Vec<f64>>) -> Self {
        self.bounds = bounds.into();
        self
    }

    /// Check if a non-empty caption is attached.
    pub fn has_caption(&self) -> bool {
        self.caption.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Bounds if present, otherwise the attribute bounding box.
    pub fn usable_bounds(&self) -> &[f64] {
        if self.bounds.is_empty() {
            &self.bbox
        } else {
            &self.bounds
        }
    }

    /// Check if the image can be located on the page.
    pub fn has_bounds(&self) -> bool {
        has_box(self.usable_bounds())
    }
}
