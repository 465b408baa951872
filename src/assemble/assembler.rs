//! Page assembly: flat elements to a page-indexed document.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Document, Element, Image, Metadata, Page, RawExtraction, Table};

use super::caption::CaptionMatcher;
use super::grid::build_grid;
use super::index::{ElementIndex, IndexedElement};
use super::options::{AssembleOptions, ErrorMode};
use super::path::PathKind;

/// Sequential table and image ids for one page (`t1, t2, ...`, `i1, i2, ...`).
#[derive(Debug, Default)]
pub struct PageIds {
    tables: u32,
    images: u32,
}

impl PageIds {
    /// Create a fresh counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next table id.
    pub fn next_table(&mut self) -> String {
        self.tables += 1;
        format!("t{}", self.tables)
    }

    /// Allocate the next image id.
    pub fn next_image(&mut self) -> String {
        self.images += 1;
        format!("i{}", self.images)
    }
}

/// Rebuilds documents from element lists.
///
/// Assembly is a pure function of its inputs: the same elements and
/// metadata always produce the same document, in parallel or not.
pub struct PageAssembler {
    options: AssembleOptions,
    captions: CaptionMatcher,
}

impl PageAssembler {
    /// Create an assembler with default options.
    pub fn new() -> Self {
        Self::with_options(AssembleOptions::default())
    }

    /// Create an assembler with custom options.
    pub fn with_options(options: AssembleOptions) -> Self {
        let captions = CaptionMatcher::with_config(options.caption.clone());
        Self { options, captions }
    }

    /// Current options.
    pub fn options(&self) -> &AssembleOptions {
        &self.options
    }

    /// Rebuild a raw extraction received for `source` (a filename).
    ///
    /// Fails with [`Error::InvalidPageCount`] when the declared page count
    /// is negative.
    pub fn restructure(&self, raw: &RawExtraction, source: &str) -> Result<Document> {
        let page_count = raw.page_count()?;
        let info = &raw.extended_metadata;
        let metadata = Metadata::new(source, page_count)
            .with_pdf_version(info.pdf_version.clone())
            .with_language(info.language.clone())
            .with_extraction_timestamp(info.id_instance.clone());
        self.assemble(&raw.elements, metadata)
    }

    /// Assemble `metadata.page_count` pages from `elements`.
    ///
    /// Pages without elements are still emitted, empty. In strict mode a
    /// paragraph, figure or table on a page `>= page_count` fails the call
    /// with [`Error::PageOutOfRange`]; lenient mode skips it.
    pub fn assemble(&self, elements: &[Element], metadata: Metadata) -> Result<Document> {
        let page_count = metadata.page_count;
        let index = ElementIndex::new(elements);
        let buckets = self.partition(&index, page_count)?;

        let build = |(page_index, bucket): (usize, &Vec<&IndexedElement<'_>>)| {
            self.build_page(page_index as u32, bucket, &index)
        };
        let pages: Vec<Page> = if self.options.parallel {
            buckets.par_iter().enumerate().map(build).collect()
        } else {
            buckets.iter().enumerate().map(build).collect()
        };

        let mut document = Document::new(metadata.document_id(), metadata);
        document.pages = pages;

        log::debug!(
            "Assembled {}: {} pages, {} tables, {} images from {} elements",
            document.document_id,
            document.page_count(),
            document.table_count(),
            document.image_count(),
            elements.len()
        );

        Ok(document)
    }

    /// Group the elements assembly places on pages, preserving input order.
    fn partition<'i, 'a>(
        &self,
        index: &'i ElementIndex<'a>,
        page_count: u32,
    ) -> Result<Vec<Vec<&'i IndexedElement<'a>>>> {
        let mut buckets = vec![Vec::new(); page_count as usize];

        for entry in index.entries() {
            if !matches!(
                entry.kind,
                PathKind::Paragraph | PathKind::Figure | PathKind::Table
            ) {
                continue;
            }

            let page = entry.element.page;
            match buckets.get_mut(page as usize) {
                Some(bucket) => bucket.push(entry),
                None if self.options.error_mode == ErrorMode::Strict => {
                    return Err(Error::PageOutOfRange(page, page_count));
                }
                None => {
                    log::warn!(
                        "Skipping {} on page {}: document has {} pages",
                        entry.path.as_str(),
                        page,
                        page_count
                    );
                }
            }
        }

        Ok(buckets)
    }

    fn build_page(
        &self,
        page_index: u32,
        entries: &[&IndexedElement<'_>],
        index: &ElementIndex<'_>,
    ) -> Page {
        let page_number = page_index + 1;
        let mut page = Page::new(page_number);
        let mut ids = PageIds::new();
        let mut texts: Vec<&str> = Vec::new();

        for entry in entries {
            match entry.kind {
                PathKind::Paragraph => texts.extend(entry.element.non_empty_text()),
                PathKind::Figure => {
                    let image = self.build_image(page_number, ids.next_image(), entry, index);
                    page.add_image(image);
                }
                PathKind::Table => {
                    let table = build_table(ids.next_table(), entry, index);
                    page.add_table(table);
                }
                _ => {}
            }
        }

        page.text = texts.join(" ").trim().to_string();

        log::debug!(
            "Page {}: {} chars, {} tables, {} images",
            page_number,
            page.text.len(),
            page.tables.len(),
            page.images.len()
        );

        page
    }

    fn build_image(
        &self,
        page_number: u32,
        image_id: String,
        entry: &IndexedElement<'_>,
        index: &ElementIndex<'_>,
    ) -> Image {
        let element = entry.element;
        Image {
            path: Image::output_path(page_number, &image_id),
            caption: self.captions.find_caption(element, index),
            bounds: element.bounds.clone(),
            bbox: element.attributes.bbox(),
            placement: element.attributes.placement(),
            image_id,
        }
    }
}

impl Default for PageAssembler {
    fn default() -> Self {
        Self::new()
    }
}

fn build_table(table_id: String, entry: &IndexedElement<'_>, index: &ElementIndex<'_>) -> Table {
    let element = entry.element;
    Table {
        table_id,
        data: build_grid(entry, index),
        bounds: element.bounds.clone(),
        bbox: element.attributes.bbox(),
        num_rows: element.attributes.num_rows(),
        placement: element.attributes.placement(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementAttributes;

    fn metadata(pages: u32) -> Metadata {
        Metadata::new("sample.pdf", pages)
    }

    #[test]
    fn test_page_ids() {
        let mut ids = PageIds::new();
        assert_eq!(ids.next_table(), "t1");
        assert_eq!(ids.next_image(), "i1");
        assert_eq!(ids.next_table(), "t2");
        assert_eq!(ids.next_image(), "i2");
    }

    #[test]
    fn test_text_joined_in_input_order() {
        let elements = vec![
            Element::new("//Document/P", 0).with_text("Hello"),
            Element::new("//Document/P[2]", 0).with_text("World"),
        ];
        let doc = PageAssembler::new().assemble(&elements, metadata(1)).unwrap();
        assert_eq!(doc.pages[0].text, "Hello World");
    }

    #[test]
    fn test_paragraph_spans_join_page_text() {
        let elements = vec![
            Element::new("//Document/P", 0).with_text("Hello"),
            Element::new("//Document/ParagraphSpan", 0).with_text("continued"),
        ];
        let doc = PageAssembler::new().assemble(&elements, metadata(1)).unwrap();
        assert_eq!(doc.pages[0].text, "Hello continued");
    }

    #[test]
    fn test_text_is_trimmed() {
        let elements = vec![
            Element::new("//Document/P", 0).with_text("  padded"),
            Element::new("//Document/P", 0).with_text("end  "),
        ];
        let doc = PageAssembler::new().assemble(&elements, metadata(1)).unwrap();
        assert_eq!(doc.pages[0].text, "padded end");
    }

    #[test]
    fn test_empty_pages_are_emitted() {
        let elements = vec![Element::new("//Document/P", 2).with_text("late")];
        let doc = PageAssembler::new().assemble(&elements, metadata(4)).unwrap();

        assert_eq!(doc.pages.len(), 4);
        let numbers: Vec<u32> = doc.pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(doc.pages[0].is_empty());
        assert_eq!(doc.pages[2].text, "late");
        assert!(doc.pages[3].is_empty());
    }

    #[test]
    fn test_zero_pages() {
        let doc = PageAssembler::new().assemble(&[], metadata(0)).unwrap();
        assert!(doc.pages.is_empty());
        assert_eq!(doc.document_id, "sample");
    }

    #[test]
    fn test_ids_restart_per_page() {
        let elements = vec![
            Element::new("//Document/Figure", 0),
            Element::new("//Document/Figure[2]", 0),
            Element::new("//Document/Figure[3]", 1),
            Element::new("//Document/Table", 1),
        ];
        let doc = PageAssembler::new().assemble(&elements, metadata(2)).unwrap();

        let first: Vec<_> = doc.pages[0].images.iter().map(|i| i.image_id.as_str()).collect();
        assert_eq!(first, vec!["i1", "i2"]);
        assert_eq!(doc.pages[1].images[0].image_id, "i1");
        assert_eq!(doc.pages[1].images[0].path, "images/page2_i1.png");
        assert_eq!(doc.pages[1].tables[0].table_id, "t1");
    }

    #[test]
    fn test_attribute_defaults_on_records() {
        let elements = vec![
            Element::new("//Document/Figure", 0),
            Element::new("//Document/Table", 0),
        ];
        let doc = PageAssembler::new().assemble(&elements, metadata(1)).unwrap();
        let image = &doc.pages[0].images[0];
        let table = &doc.pages[0].tables[0];

        assert!(image.bounds.is_empty());
        assert!(image.bbox.is_empty());
        assert_eq!(image.placement, "Unknown");
        assert!(image.caption.is_none());
        assert_eq!(table.num_rows, 0);
        assert_eq!(table.placement, "Unknown");
        assert!(table.data.is_empty());
    }

    #[test]
    fn test_table_attributes_copied() {
        let attrs = ElementAttributes::new()
            .with_bbox(vec![1.0, 2.0, 3.0, 4.0])
            .with_placement("Block")
            .with_num_rows(3);
        let elements = vec![Element::new("//Document/Table", 0)
            .with_bounds(vec![5.0, 6.0, 7.0, 8.0])
            .with_attributes(attrs)];
        let doc = PageAssembler::new().assemble(&elements, metadata(1)).unwrap();
        let table = &doc.pages[0].tables[0];

        assert_eq!(table.bounds, vec![5.0, 6.0, 7.0, 8.0]);
        assert_eq!(table.bbox, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(table.placement, "Block");
        assert_eq!(table.num_rows, 3);
    }

    #[test]
    fn test_out_of_range_page_strict() {
        let elements = vec![Element::new("//Document/P", 5).with_text("stray")];
        let result = PageAssembler::new().assemble(&elements, metadata(2));
        assert!(matches!(result, Err(Error::PageOutOfRange(5, 2))));
    }

    #[test]
    fn test_out_of_range_page_lenient() {
        let elements = vec![
            Element::new("//Document/P", 0).with_text("kept"),
            Element::new("//Document/P", 5).with_text("stray"),
        ];
        let assembler = PageAssembler::with_options(AssembleOptions::new().lenient());
        let doc = assembler.assemble(&elements, metadata(1)).unwrap();
        assert_eq!(doc.pages[0].text, "kept");
    }

    #[test]
    fn test_out_of_range_cells_are_not_rejected() {
        let elements = vec![
            Element::new("//Document/Table", 0),
            Element::new("//Document/Table/TR/TD", 7)
                .with_attributes(ElementAttributes::cell(0, 0)),
            Element::new("//Document/Table/TR/TD/P", 7).with_text("x"),
        ];
        let doc = PageAssembler::new().assemble(&elements, metadata(1)).unwrap();
        assert_eq!(doc.pages[0].tables[0].data, vec![vec!["x"]]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let elements: Vec<Element> = (0..40)
            .map(|i| {
                let path = if i % 3 == 0 { "//Document/Figure" } else { "//Document/P" };
                Element::new(path, i % 5)
                    .with_text(format!("text {}", i))
                    .with_bounds(vec![100.0, 500.0 - i as f64, 200.0, 520.0])
            })
            .collect();
        let parallel = PageAssembler::new().assemble(&elements, metadata(5)).unwrap();
        let sequential = PageAssembler::with_options(AssembleOptions::new().sequential())
            .assemble(&elements, metadata(5))
            .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_restructure_negative_page_count() {
        let raw = RawExtraction::new(Vec::new(), -2);
        let result = PageAssembler::new().restructure(&raw, "x.pdf");
        assert!(matches!(result, Err(Error::InvalidPageCount(-2))));
    }

    #[test]
    fn test_restructure_metadata() {
        let mut raw = RawExtraction::new(Vec::new(), 1);
        raw.extended_metadata.pdf_version = "1.7".to_string();
        raw.extended_metadata.language = "en".to_string();
        raw.extended_metadata.id_instance = "2024-05-01T10:00:00".to_string();

        let doc = PageAssembler::new().restructure(&raw, "report.pdf").unwrap();
        assert_eq!(doc.document_id, "report");
        assert_eq!(doc.metadata.source, "report.pdf");
        assert_eq!(doc.metadata.page_count, 1);
        assert_eq!(doc.metadata.pdf_version, "1.7");
        assert_eq!(doc.metadata.language, "en");
        assert_eq!(doc.metadata.extraction_timestamp, "2024-05-01T10:00:00");
    }
}
