//! Content quality heuristics over an assembled document.

use serde::{Deserialize, Serialize};

use crate::model::Document;

/// Overall content quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentQuality {
    #[default]
    Good,
    Warning,
}

/// Outcome of the quality check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentVerification {
    #[serde(rename = "content_quality")]
    pub quality: ContentQuality,

    pub warnings: Vec<String>,

    #[serde(rename = "content_summary")]
    pub summary: ContentSummary,
}

impl ContentVerification {
    /// Check if no warning was raised.
    pub fn is_good(&self) -> bool {
        self.quality == ContentQuality::Good
    }
}

/// Coverage counts and per-element statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSummary {
    pub text_pages: usize,
    pub table_pages: usize,
    pub image_pages: usize,
    pub total_tables: usize,
    pub total_images: usize,
    pub tables_with_data: usize,
    pub images_with_captions: usize,
    pub images_with_bounds: usize,
    pub empty_pages: Vec<u32>,
    pub tables: Vec<TableStats>,
    pub images: Vec<ImageStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub page: u32,
    pub table_id: String,
    pub rows: usize,
    pub columns: usize,
    pub has_data: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStats {
    pub page: u32,
    pub image_id: String,
    pub has_caption: bool,
    pub has_bounds: bool,
    pub caption_length: usize,
}

/// Inspect a document for empty pages, empty tables and unlocated images.
///
/// Pages are numbered by position, so a document with wrong `page_number`
/// fields is still reported consistently.
pub fn verify_quality(document: &Document) -> ContentVerification {
    let mut summary = ContentSummary::default();

    for (i, page) in document.pages.iter().enumerate() {
        let page_num = i as u32 + 1;

        if page.has_text() {
            summary.text_pages += 1;
        }
        if !page.tables.is_empty() {
            summary.table_pages += 1;
        }
        if !page.images.is_empty() {
            summary.image_pages += 1;
        }
        if page.is_empty() {
            summary.empty_pages.push(page_num);
        }

        for (j, table) in page.tables.iter().enumerate() {
            let stats = TableStats {
                page: page_num,
                table_id: label(&table.table_id, 't', j),
                rows: table.row_count(),
                columns: table.column_count(),
                has_data: table.has_data(),
            };
            if stats.has_data {
                summary.tables_with_data += 1;
            }
            summary.tables.push(stats);
        }

        for (j, image) in page.images.iter().enumerate() {
            let stats = ImageStats {
                page: page_num,
                image_id: label(&image.image_id, 'i', j),
                has_caption: image.has_caption(),
                has_bounds: image.has_bounds(),
                caption_length: image.caption.as_deref().map_or(0, |c| c.chars().count()),
            };
            if stats.has_caption {
                summary.images_with_captions += 1;
            }
            if stats.has_bounds {
                summary.images_with_bounds += 1;
            }
            summary.images.push(stats);
        }
    }

    summary.total_tables = summary.tables.len();
    summary.total_images = summary.images.len();

    let mut warnings = Vec::new();
    if !summary.empty_pages.is_empty() {
        warnings.push(format!("Empty pages detected: {:?}", summary.empty_pages));
    }
    if summary.tables_with_data < summary.total_tables {
        warnings.push("Some tables have no data".to_string());
    }
    if summary.images_with_bounds < summary.total_images {
        warnings.push("Some images missing bounds".to_string());
    }

    let quality = if warnings.is_empty() {
        ContentQuality::Good
    } else {
        ContentQuality::Warning
    };

    ContentVerification {
        quality,
        warnings,
        summary,
    }
}

fn label(id: &str, prefix: char, position: usize) -> String {
    if id.is_empty() {
        format!("{}{}", prefix, position + 1)
    } else {
        id.to_string()
    }
}
