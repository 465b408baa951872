//! Bounding boxes in page layout coordinates.

use serde::{Deserialize, Serialize};

/// Minimum number of coordinates a bounds list needs to describe a box.
pub const BOX_COORDINATES: usize = 4;

/// An axis-aligned box `[x0, y0, x1, y1]`.
///
/// Layout coordinates follow the extraction service: the origin is the
/// bottom-left corner of the page, so a larger `y` is higher on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f64,
    /// Bottom edge
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Top edge
    pub y1: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Read a box from a coordinate list.
    ///
    /// Returns `None` when fewer than four coordinates are present. Extra
    /// coordinates are ignored.
    pub fn from_slice(coords: &[f64]) -> Option<Self> {
        match coords {
            [x0, y0, x1, y1, ..] => Some(Self::new(*x0, *y0, *x1, *y1)),
            _ => None,
        }
    }

    /// Horizontal distance between the left edges of two boxes.
    pub fn left_offset(&self, other: &BoundingBox) -> f64 {
        (self.x0 - other.x0).abs()
    }
}

/// Check whether a coordinate list describes a usable box.
pub fn has_box(coords: &[f64]) -> bool {
    coords.len() >= BOX_COORDINATES
}
