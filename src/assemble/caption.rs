//! Caption matching by spatial proximity.
//!
//! A caption candidate is a paragraph that sits below the figure (smaller
//! bottom edge) and starts in roughly the same column (left edges within
//! `max_horizontal_offset`). The nearest candidate wins if its vertical gap
//! is under `max_vertical_gap`.

use crate::geometry::BoundingBox;
use crate::model::Element;

use super::index::ElementIndex;
use super::options::CaptionConfig;
use super::path::PathKind;

/// Picks a caption for a figure from the surrounding paragraphs.
#[derive(Debug, Clone, Default)]
pub struct CaptionMatcher {
    config: CaptionConfig,
}

impl CaptionMatcher {
    /// Create a caption matcher with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a caption matcher with custom thresholds.
    pub fn with_config(config: CaptionConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &CaptionConfig {
        &self.config
    }

    /// Find the caption for `image`, if any.
    ///
    /// Requires the image to have at least four bound coordinates. Ties on
    /// the vertical gap go to the paragraph that comes first in the index.
    pub fn find_caption(&self, image: &Element, index: &ElementIndex<'_>) -> Option<String> {
        let image_box = BoundingBox::from_slice(&image.bounds)?;

        let mut best: Option<(f64, &str)> = None;
        for entry in index.of_kind(PathKind::Paragraph) {
            let paragraph = entry.element;
            if self.config.same_page_only && paragraph.page != image.page {
                continue;
            }
            let Some(text_box) = BoundingBox::from_slice(&paragraph.bounds) else {
                continue;
            };
            if text_box.y0 >= image_box.y0
                || text_box.left_offset(&image_box) >= self.config.max_horizontal_offset
            {
                continue;
            }

            let gap = image_box.y0 - text_box.y0;
            if best.map_or(true, |(best_gap, _)| gap < best_gap) {
                best = Some((gap, paragraph.non_empty_text().unwrap_or_default()));
            }
        }

        match best {
            Some((gap, text)) if gap < self.config.max_vertical_gap => {
                log::debug!("Caption for {} at gap {}: {:?}", image.path, gap, text);
                Some(text.to_string())
            }
            Some((gap, _)) => {
                log::debug!(
                    "Nearest caption candidate for {} is too far ({} units)",
                    image.path,
                    gap
                );
                None
            }
            None => None,
        }
    }
}
