//! Verification report and overall assessment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Document, Element, RawExtraction};

use super::compare::{compare, compare_extraction, Comparison};
use super::quality::{verify_quality, ContentQuality, ContentVerification};
use super::structure::{verify_document_structure, verify_structure, StructureVerification};

/// Single overall verdict for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assessment {
    Excellent,
    Good,
    /// Not produced by [`Assessment::from_results`]; accepted when reading
    /// reports back.
    Fair,
    Poor,
}

impl Assessment {
    /// Derive the verdict from the structure and quality outcomes.
    pub fn from_results(structure_valid: bool, quality: ContentQuality) -> Self {
        match (structure_valid, quality) {
            (true, ContentQuality::Good) => Assessment::Excellent,
            (true, ContentQuality::Warning) => Assessment::Good,
            (false, _) => Assessment::Poor,
        }
    }

    /// Check if the verdict is `excellent` or `good`.
    pub fn is_passing(self) -> bool {
        matches!(self, Assessment::Excellent | Assessment::Good)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Assessment::Excellent => "excellent",
            Assessment::Good => "good",
            Assessment::Fair => "fair",
            Assessment::Poor => "poor",
        }
    }
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full verification result for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Source filename from the document metadata
    pub source: String,

    pub generated_at: DateTime<Utc>,

    pub structure_verification: StructureVerification,

    pub content_verification: ContentVerification,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,

    pub overall_assessment: Assessment,
}

impl VerificationReport {
    fn new(
        document: &Document,
        structure_verification: StructureVerification,
        comparison: Option<Comparison>,
    ) -> Self {
        let content_verification = verify_quality(document);
        let overall_assessment =
            Assessment::from_results(structure_verification.valid, content_verification.quality);

        log::debug!(
            "Verified {}: {} issues, {} warnings, assessment {}",
            document.metadata.source,
            structure_verification.issues.len(),
            content_verification.warnings.len(),
            overall_assessment
        );

        Self {
            source: document.metadata.source.clone(),
            generated_at: Utc::now(),
            structure_verification,
            content_verification,
            comparison,
            overall_assessment,
        }
    }

    /// Check if the document passed verification.
    pub fn is_passing(&self) -> bool {
        self.overall_assessment.is_passing()
    }
}

/// Runs the structure, quality and comparison checks in one go.
pub struct Verifier;

impl Verifier {
    /// Verify an assembled document, optionally against its raw elements.
    pub fn verify(document: &Document, raw_elements: Option<&[Element]>) -> Result<VerificationReport> {
        let structure = verify_document_structure(document)?;
        let comparison = raw_elements.map(|elements| compare(document, elements));
        Ok(VerificationReport::new(document, structure, comparison))
    }

    /// Verify a document loaded as JSON, optionally against a raw extraction.
    ///
    /// Structure is checked on the JSON itself; quality and comparison run on
    /// the typed document, where missing or wrong-typed fields fall back to
    /// their defaults. Only a root that is not an object is an error.
    pub fn verify_value(value: &Value, raw: Option<&RawExtraction>) -> Result<VerificationReport> {
        let structure = verify_structure(value)?;
        let document: Document = serde_json::from_value(value.clone())
            .map_err(|e| Error::InvalidDocument(e.to_string()))?;
        let comparison = raw.map(|raw| compare_extraction(&document, raw));
        Ok(VerificationReport::new(&document, structure, comparison))
    }
}
