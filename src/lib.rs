//! # docstruct
//!
//! Structure reconstruction and verification for layout-extraction output.
//!
//! An extraction service reports a document as a flat list of elements, each
//! with a hierarchical path (`//Document/Table/TR[2]/TD/P`), a page index,
//! optional text and bounds. This library rebuilds a page-indexed document
//! from that list (page text, table grids, images with inferred captions)
//! and verifies the result.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docstruct::{restructure_file, render, Verifier};
//!
//! fn main() -> docstruct::Result<()> {
//!     let doc = restructure_file("structuredData.json")?;
//!     println!("{}", render::to_json(&doc, render::JsonFormat::Pretty)?);
//!
//!     let report = Verifier::verify(&doc, None)?;
//!     println!("{}", render::report_summary(&report)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Segment-aware paths**: `Table` never absorbs the cells of `Table[2]`
//! - **Table grids**: row-major grids from `RowIndex`/`ColIndex` attributes
//! - **Captions**: nearest paragraph below a figure within configurable limits
//! - **Parallel assembly**: pages are built with Rayon, output is deterministic
//! - **Verification**: structure, content quality and count comparison

pub mod assemble;
pub mod detect;
pub mod error;
pub mod geometry;
pub mod model;
pub mod render;
pub mod verify;

// Re-export commonly used types
pub use assemble::{AssembleOptions, CaptionConfig, CaptionMatcher, ErrorMode, PageAssembler};
pub use detect::{detect_kind, detect_kind_from_path, InputKind};
pub use error::{Error, Result};
pub use model::{
    Document, Element, ElementAttributes, ExtendedMetadata, Image, Metadata, Page, RawExtraction,
    Table,
};
pub use render::JsonFormat;
pub use verify::{Assessment, VerificationReport, Verifier};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Rebuild a document from a raw extraction file.
///
/// The file name is recorded as the document source. Use
/// [`restructure_reader`] to name the source explicitly.
///
/// # Example
///
/// ```no_run
/// use docstruct::restructure_file;
///
/// let doc = restructure_file("report.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn restructure_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    Docstruct::new().restructure_file(path)
}

/// Rebuild a document from a raw extraction JSON string.
///
/// # Example
///
/// ```
/// use docstruct::restructure_str;
///
/// let json = r#"{
///     "elements": [{"Path": "//Document/P", "Page": 0, "Text": "Hello"}],
///     "extended_metadata": {"page_count": 1}
/// }"#;
/// let doc = restructure_str(json, "hello.pdf").unwrap();
/// assert_eq!(doc.pages[0].text, "Hello");
/// ```
pub fn restructure_str(json: &str, source: &str) -> Result<Document> {
    Docstruct::new().restructure_str(json, source)
}

/// Rebuild a document from a reader yielding raw extraction JSON.
pub fn restructure_reader<R: Read>(reader: R, source: &str) -> Result<Document> {
    Docstruct::new().restructure_reader(reader, source)
}

/// Verify a document file, optionally comparing it with its raw extraction.
///
/// # Example
///
/// ```no_run
/// use docstruct::verify_file;
///
/// let report = verify_file("report_restructured.json", Some("report.json")).unwrap();
/// println!("{}", report.overall_assessment);
/// ```
pub fn verify_file<P: AsRef<Path>, Q: AsRef<Path>>(
    path: P,
    raw_path: Option<Q>,
) -> Result<VerificationReport> {
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    let raw = match raw_path {
        Some(raw_path) => Some(read_raw(raw_path)?),
        None => None,
    };
    Verifier::verify_value(&value, raw.as_ref())
}

fn read_raw<P: AsRef<Path>>(path: P) -> Result<RawExtraction> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Builder for restructuring raw extractions.
///
/// # Example
///
/// ```no_run
/// use docstruct::{CaptionConfig, Docstruct};
///
/// let doc = Docstruct::new()
///     .lenient()
///     .sequential()
///     .with_caption_config(CaptionConfig::new().with_same_page_only(true))
///     .restructure_file("report.json")?;
/// # Ok::<(), docstruct::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Docstruct {
    options: AssembleOptions,
}

impl Docstruct {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip elements on pages beyond the page count instead of failing.
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Disable parallel page assembly.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set caption matching thresholds.
    pub fn with_caption_config(mut self, config: CaptionConfig) -> Self {
        self.options = self.options.with_caption_config(config);
        self
    }

    /// Current options.
    pub fn options(&self) -> &AssembleOptions {
        &self.options
    }

    /// Rebuild a parsed raw extraction.
    pub fn restructure(&self, raw: &RawExtraction, source: &str) -> Result<Document> {
        PageAssembler::with_options(self.options.clone()).restructure(raw, source)
    }

    /// Rebuild from a raw extraction file, named after the file.
    pub fn restructure_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let raw = read_raw(path)?;
        self.restructure(&raw, &source)
    }

    /// Rebuild from a raw extraction JSON string.
    pub fn restructure_str(&self, json: &str, source: &str) -> Result<Document> {
        let raw = RawExtraction::from_json(json)?;
        self.restructure(&raw, source)
    }

    /// Rebuild from a reader yielding raw extraction JSON.
    pub fn restructure_reader<R: Read>(&self, reader: R, source: &str) -> Result<Document> {
        let raw: RawExtraction = serde_json::from_reader(reader)?;
        self.restructure(&raw, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"{
        "elements": [
            {"Path": "//Document/P", "Page": 0, "Text": "Hello"},
            {"Path": "//Document/P[2]", "Page": 0, "Text": "World"},
            {"Path": "//Document/Figure", "Page": 1, "Bounds": [100, 500, 200, 520]},
            {"Path": "//Document/P[3]", "Page": 1, "Text": "Figure 1: demo",
             "Bounds": [100, 450, 180, 460]}
        ],
        "extended_metadata": {"page_count": 2, "pdf_version": "1.7", "ID_instance": "abc"}
    }"#;

    #[test]
    fn test_restructure_str() {
        let doc = restructure_str(RAW, "demo.pdf").unwrap();
        assert_eq!(doc.document_id, "demo");
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[0].text, "Hello World");
        assert_eq!(doc.pages[1].text, "Figure 1: demo");
        assert_eq!(
            doc.pages[1].images[0].caption.as_deref(),
            Some("Figure 1: demo")
        );
        assert_eq!(doc.metadata.extraction_timestamp, "abc");
    }

    #[test]
    fn test_restructure_reader() {
        let doc = restructure_reader(RAW.as_bytes(), "demo.pdf").unwrap();
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_restructure_invalid_json() {
        let result = restructure_str("not json", "x.pdf");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_builder_options() {
        let builder = Docstruct::new().lenient().sequential();
        assert_eq!(builder.options().error_mode, ErrorMode::Lenient);
        assert!(!builder.options().parallel);
    }

    #[test]
    fn test_builder_lenient_skips_stray_pages() {
        let json = r#"{
            "elements": [{"Path": "//Document/P", "Page": 3, "Text": "stray"}],
            "extended_metadata": {"page_count": 1}
        }"#;
        assert!(matches!(
            restructure_str(json, "x.pdf"),
            Err(Error::PageOutOfRange(3, 1))
        ));
        let doc = Docstruct::new().lenient().restructure_str(json, "x.pdf").unwrap();
        assert!(doc.pages[0].is_empty());
    }

    #[test]
    fn test_restructure_file_and_verify_file() {
        let dir = tempfile::tempdir().unwrap();
        let raw_path = dir.path().join("demo.json");
        std::fs::write(&raw_path, RAW).unwrap();

        let doc = restructure_file(&raw_path).unwrap();
        assert_eq!(doc.metadata.source, "demo.json");
        assert_eq!(doc.document_id, "demo");

        let doc_path = dir.path().join("demo_restructured.json");
        std::fs::write(&doc_path, render::to_json(&doc, JsonFormat::Pretty).unwrap()).unwrap();

        let report = verify_file(&doc_path, Some(&raw_path)).unwrap();
        assert!(report.structure_verification.valid);
        let comparison = report.comparison.unwrap();
        assert!(comparison.valid, "{:?}", comparison.differences);
        assert_eq!(comparison.summary.page_count_match, Some(true));
    }

    #[test]
    fn test_verify_file_missing() {
        let result = verify_file("does/not/exist.json", None::<&str>);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
