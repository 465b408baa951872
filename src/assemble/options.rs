//! Assembly options and configuration.

/// Options for rebuilding a document from elements.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Whether to assemble pages in parallel
    pub parallel: bool,

    /// Caption matching thresholds
    pub caption: CaptionConfig,
}

impl AssembleOptions {
    /// Create new assemble options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable lenient mode (skip elements on pages outside the document).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set caption matching configuration.
    pub fn with_caption_config(mut self, caption: CaptionConfig) -> Self {
        self.caption = caption;
        self
    }
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            parallel: true,
            caption: CaptionConfig::default(),
        }
    }
}

/// Error handling mode during assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail when an element lies on a page outside the document
    #[default]
    Strict,
    /// Skip such elements and continue
    Lenient,
}

/// Caption matching configuration.
///
/// Distances are in layout units. The defaults assume the extraction
/// service's bottom-left origin, where a caption below a figure has a
/// smaller `y0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionConfig {
    /// Maximum left-edge offset between figure and caption (exclusive)
    pub max_horizontal_offset: f64,
    /// Maximum vertical gap between figure and caption (exclusive)
    pub max_vertical_gap: f64,
    /// Only consider paragraphs on the figure's page
    pub same_page_only: bool,
}

impl CaptionConfig {
    /// Create a caption configuration with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal offset threshold.
    pub fn with_max_horizontal_offset(mut self, offset: f64) -> Self {
        self.max_horizontal_offset = offset;
        self
    }

    /// Set the vertical gap threshold.
    pub fn with_max_vertical_gap(mut self, gap: f64) -> Self {
        self.max_vertical_gap = gap;
        self
    }

    /// Restrict candidates to the figure's page.
    pub fn with_same_page_only(mut self, same_page: bool) -> Self {
        self.same_page_only = same_page;
        self
    }
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            max_horizontal_offset: 50.0,
            max_vertical_gap: 100.0,
            same_page_only: false,
        }
    }
}
