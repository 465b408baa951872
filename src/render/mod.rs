//! Rendering of documents and verification reports.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::report_summary;
