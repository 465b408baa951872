//! Page-level types.

use super::{Image, Table};
use serde::{Deserialize, Serialize};

/// A single page in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub page_number: u32,

    /// Paragraph text of the page, single-space joined
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub text: String,

    /// Tables found on the page
    #[serde(default, deserialize_with = "super::lenient::each_or_default")]
    pub tables: Vec<Table>,

    /// Images found on the page
    #[serde(default, deserialize_with = "super::lenient::each_or_default")]
    pub images: Vec<Image>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(page_number: u32) -> Self {
        Self {
            page_number,
            ..Default::default()
        }
    }

    /// Add a table to the page.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Add an image to the page.
    pub fn add_image(&mut self, image: Image) {
        self.images.push(image);
    }

    /// Check if the page carries any text.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Check if the page is empty (no text, tables or images).
    pub fn is_empty(&self) -> bool {
        !self.has_text() && self.tables.is_empty() && self.images.is_empty()
    }

    /// Get plain text content of the page, tables included.
    pub fn plain_text(&self) -> String {
        std::iter::once(self.text.clone())
            .chain(self.tables.iter().map(|t| t.plain_text()))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
