//! Integration tests for the verification pipeline.

use docstruct::render::{report_summary, to_json, JsonFormat};
use docstruct::verify::{compare, verify_quality, verify_structure, ContentQuality};
use docstruct::{
    restructure_str, verify_file, Assessment, Element, ElementAttributes, Metadata, PageAssembler,
    Verifier,
};
use serde_json::json;

fn assembled() -> docstruct::Document {
    let elements = vec![
        Element::new("//Document/P", 0)
            .with_text("Figure 1: overview")
            .with_bounds(vec![100.0, 450.0, 300.0, 462.0]),
        Element::new("//Document/Figure", 0).with_bounds(vec![100.0, 480.0, 300.0, 700.0]),
        Element::new("//Document/Table", 1),
        Element::new("//Document/Table/TR/TD", 1).with_attributes(ElementAttributes::cell(0, 0)),
        Element::new("//Document/Table/TR/TD/P", 1).with_text("cell"),
        Element::new("//Document/P[2]", 1).with_text("Closing words"),
    ];
    PageAssembler::new()
        .assemble(&elements, Metadata::new("report.pdf", 2))
        .unwrap()
}

#[test]
fn test_assembled_document_is_structurally_valid() {
    let doc = assembled();
    let value = serde_json::to_value(&doc).unwrap();
    let result = verify_structure(&value).unwrap();
    assert!(result.valid, "{:?}", result.issues);
    assert_eq!(result.summary.total_pages, 2);
    assert_eq!(result.summary.total_tables, 1);
    assert_eq!(result.summary.total_images, 1);
    assert_eq!(result.summary.pages_with_content, 2);
}

#[test]
fn test_table_without_cells_is_structurally_invalid() {
    let elements = vec![
        Element::new("//Document/P", 0).with_text("Intro"),
        Element::new("//Document/Table", 0),
    ];
    let doc = PageAssembler::new()
        .assemble(&elements, Metadata::new("report.pdf", 1))
        .unwrap();
    assert!(doc.pages[0].tables[0].data.is_empty());

    let report = Verifier::verify(&doc, None).unwrap();
    assert!(!report.structure_verification.valid);
    assert_eq!(
        report.structure_verification.issues,
        vec!["Page 1: Table t1 missing data"]
    );
    assert_eq!(
        report.content_verification.warnings,
        vec!["Some tables have no data"]
    );
    assert_eq!(report.overall_assessment, Assessment::Poor);
}

#[test]
fn test_page_count_mismatch_scenario() {
    let value = json!({
        "document_id": "report",
        "metadata": {"source": "report.pdf", "page_count": 2},
        "pages": [{"page_number": 1, "text": "Only page", "tables": [], "images": []}]
    });
    let result = verify_structure(&value).unwrap();
    assert!(!result.valid);
    assert!(result
        .issues
        .contains(&"Page count mismatch: expected 2, got 1".to_string()));
}

#[test]
fn test_excellent_report() {
    let doc = assembled();
    let report = Verifier::verify(&doc, None).unwrap();
    assert_eq!(report.overall_assessment, Assessment::Excellent);
    assert_eq!(report.content_verification.quality, ContentQuality::Good);
    assert_eq!(report.content_verification.summary.images_with_captions, 1);
}

#[test]
fn test_warning_report_is_good() {
    let mut doc = assembled();
    doc.pages[0].images[0].bounds.clear();
    let report = Verifier::verify(&doc, None).unwrap();
    assert_eq!(report.overall_assessment, Assessment::Good);
    assert_eq!(
        report.content_verification.warnings,
        vec!["Some images missing bounds"]
    );
}

#[test]
fn test_quality_warnings_are_independent() {
    let raw = r#"{
        "elements": [
            {"Path": "//Document/Table", "Page": 0},
            {"Path": "//Document/Figure", "Page": 0, "Bounds": [1, 2]}
        ],
        "extended_metadata": {"page_count": 2}
    }"#;
    let doc = restructure_str(raw, "sparse.pdf").unwrap();
    let result = verify_quality(&doc);
    assert_eq!(result.quality, ContentQuality::Warning);
    assert_eq!(
        result.warnings,
        vec![
            "Empty pages detected: [2]",
            "Some tables have no data",
            "Some images missing bounds",
        ]
    );
}

#[test]
fn test_comparison_mismatch() {
    let doc = assembled();
    let elements = vec![
        Element::new("//Document/Table", 1),
        Element::new("//Document/Table[2]", 1),
        Element::new("//Document/Figure", 0),
    ];
    let result = compare(&doc, &elements);
    assert!(!result.valid);
    assert_eq!(
        result.differences,
        vec!["Table count: restructured=1, original=2"]
    );
}

#[test]
fn test_verify_file_roundtrip() {
    let raw = r#"{
        "elements": [
            {"Path": "//Document/P", "Page": 0, "Text": "Hello"},
            {"Path": "//Document/Figure", "Page": 0, "Bounds": [10, 100, 50, 140]}
        ],
        "extended_metadata": {"page_count": 1}
    }"#;
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("hello.json");
    let doc_path = dir.path().join("hello_restructured.json");
    std::fs::write(&raw_path, raw).unwrap();

    let doc = restructure_str(raw, "hello.pdf").unwrap();
    std::fs::write(&doc_path, to_json(&doc, JsonFormat::Compact).unwrap()).unwrap();

    let report = verify_file(&doc_path, Some(&raw_path)).unwrap();
    assert_eq!(report.source, "hello.pdf");
    assert_eq!(report.overall_assessment, Assessment::Excellent);
    assert!(report.comparison.as_ref().unwrap().valid);

    let summary = report_summary(&report).unwrap();
    assert!(summary.contains("Assessment: EXCELLENT"));
    assert!(summary.contains("Comparison: consistent"));
}

#[test]
fn test_verify_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    let doc_path = dir.path().join("broken.json");
    std::fs::write(
        &doc_path,
        r#"{"metadata": {"source": "x.pdf", "page_count": 1},
            "pages": [{"page_number": 3, "text": "t", "tables": [{"data": []}], "images": []}]}"#,
    )
    .unwrap();

    let report = verify_file(&doc_path, None::<&str>).unwrap();
    assert_eq!(report.overall_assessment, Assessment::Poor);
    assert_eq!(
        report.structure_verification.issues,
        vec![
            "Missing required key: document_id",
            "Page 1: Page number mismatch: expected 1, got 3",
            "Page 1: Table t1 missing table_id",
            "Page 1: Table t1 missing data",
        ]
    );
    assert!(!report.is_passing());
}
