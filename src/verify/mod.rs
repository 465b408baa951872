//! Verification of assembled documents.
//!
//! Three independent checks feed one [`VerificationReport`]:
//! structure against the output schema, content quality heuristics, and an
//! optional count comparison with the raw elements.

mod compare;
mod quality;
mod report;
mod structure;

pub use compare::{compare, compare_extraction, Comparison, ComparisonSummary, RestructuredCounts};
pub use quality::{verify_quality, ContentQuality, ContentSummary, ContentVerification, ImageStats, TableStats};
pub use report::{Assessment, VerificationReport, Verifier};
pub use structure::{verify_document_structure, verify_structure, StructureSummary, StructureVerification};
