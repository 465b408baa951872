//! Document-level types.

use super::{Image, Page};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A page-indexed document rebuilt from an element list.
///
/// Every field defaults when missing so that documents read back from disk
/// load leniently; the structure verifier reports what was missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier (source filename stem)
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub document_id: String,

    /// Document metadata
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub metadata: Metadata,

    /// Pages in ascending order, one per page index
    #[serde(default, deserialize_with = "super::lenient::each_or_default")]
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(document_id: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            document_id: document_id.into(),
            metadata,
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over all images in page order.
    pub fn images(&self) -> impl Iterator<Item = (&Page, &Image)> {
        self.pages
            .iter()
            .flat_map(|page| page.images.iter().map(move |image| (page, image)))
    }

    /// Total number of tables.
    pub fn table_count(&self) -> usize {
        self.pages.iter().map(|p| p.tables.len()).sum()
    }

    /// Total number of images.
    pub fn image_count(&self) -> usize {
        self.pages.iter().map(|p| p.images.len()).sum()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Source filename
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub source: String,

    /// Total number of pages
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub page_count: u32,

    /// PDF version (e.g., "1.7")
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub pdf_version: String,

    /// Document language
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub language: String,

    /// Extraction timestamp or instance identifier
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub extraction_timestamp: String,
}

impl Metadata {
    /// Create metadata for a source file.
    pub fn new(source: impl Into<String>, page_count: u32) -> Self {
        Self {
            source: source.into(),
            page_count,
            ..Default::default()
        }
    }

    /// Set the PDF version and return self.
    pub fn with_pdf_version(mut self, version: impl Into<String>) -> Self {
        self.pdf_version = version.into();
        self
    }

    /// Set the language and return self.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the extraction timestamp and return self.
    pub fn with_extraction_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.extraction_timestamp = timestamp.into();
        self
    }

    /// Document identifier derived from the source filename stem.
    pub fn document_id(&self) -> String {
        Path::new(&self.source)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
