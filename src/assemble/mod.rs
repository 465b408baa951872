//! Structure reconstruction: flat element stream to page-indexed document.

mod assembler;
mod caption;
mod grid;
mod index;
mod options;
mod path;

pub use assembler::{PageAssembler, PageIds};
pub use caption::CaptionMatcher;
pub use grid::build_grid;
pub use index::{ElementIndex, IndexedElement};
pub use options::{AssembleOptions, CaptionConfig, ErrorMode};
pub use path::{classify, tally_element_types, ElementPath, PathKind, Segment, DOCUMENT_ROOT};
