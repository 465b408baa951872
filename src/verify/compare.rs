//! Count cross-check between a document and the elements it came from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assemble::tally_element_types;
use crate::model::{Document, Element, RawExtraction};

/// Outcome of the comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(rename = "comparison_valid")]
    pub valid: bool,

    pub differences: Vec<String>,

    pub summary: ComparisonSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Raw element counts by terminal path segment
    pub original_elements: BTreeMap<String, usize>,

    pub restructured_elements: RestructuredCounts,

    /// Only set when a raw page count was available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count_match: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestructuredCounts {
    pub tables: usize,
    pub images: usize,
    /// Pages carrying text
    pub text: usize,
}

/// Compare table and figure counts of `document` with `elements`.
///
/// A type absent from the elements counts as zero.
pub fn compare(document: &Document, elements: &[Element]) -> Comparison {
    compare_counts(document, elements, None)
}

/// Like [`compare`], and also check the page count of a full extraction.
pub fn compare_extraction(document: &Document, raw: &RawExtraction) -> Comparison {
    compare_counts(document, &raw.elements, Some(raw.extended_metadata.page_count))
}

fn compare_counts(
    document: &Document,
    elements: &[Element],
    original_pages: Option<i64>,
) -> Comparison {
    let original_elements = tally_element_types(elements);
    let restructured = RestructuredCounts {
        tables: document.table_count(),
        images: document.image_count(),
        text: document.pages.iter().filter(|p| p.has_text()).count(),
    };

    let mut differences = Vec::new();

    let page_count_match = original_pages.map(|original| {
        let restructured_pages = i64::from(document.metadata.page_count);
        if restructured_pages != original {
            differences.push(format!(
                "Page count: restructured={}, original={}",
                restructured_pages, original
            ));
        }
        restructured_pages == original
    });

    let count = |name: &str| original_elements.get(name).copied().unwrap_or(0);
    let original_tables = count("Table");
    if original_tables != restructured.tables {
        differences.push(format!(
            "Table count: restructured={}, original={}",
            restructured.tables, original_tables
        ));
    }
    let original_figures = count("Figure");
    if original_figures != restructured.images {
        differences.push(format!(
            "Image count: restructured={}, original={}",
            restructured.images, original_figures
        ));
    }

    if !differences.is_empty() {
        log::debug!(
            "Comparison of {} found {} differences",
            document.document_id,
            differences.len()
        );
    }

    Comparison {
        valid: differences.is_empty(),
        differences,
        summary: ComparisonSummary {
            original_elements,
            restructured_elements: restructured,
            page_count_match,
        },
    }
}
