//! Document model types.
//!
//! Input side: [`Element`] records as delivered by the extraction service.
//! Output side: the page-indexed [`Document`] rebuilt from them.

mod document;
mod element;
mod image;
mod lenient;
mod page;
mod table;

pub use document::{Document, Metadata};
pub use element::{Element, ElementAttributes, ExtendedMetadata, RawExtraction, UNKNOWN_PLACEMENT};
pub use image::Image;
pub use page::Page;
pub use table::Table;
