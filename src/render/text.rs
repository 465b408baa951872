//! Plain text summary of a verification report.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::verify::VerificationReport;

/// Render the human-readable summary of a report.
pub fn report_summary(report: &VerificationReport) -> Result<String> {
    let mut out = String::new();
    write_summary(&mut out, report)
        .map_err(|e| Error::Render(format!("Summary formatting error: {}", e)))?;
    Ok(out.trim_end().to_string())
}

fn write_summary(out: &mut String, report: &VerificationReport) -> std::fmt::Result {
    let structure = &report.structure_verification;
    let content = &report.content_verification;
    let counts = &content.summary;

    writeln!(out, "Source: {}", report.source)?;
    writeln!(out, "Assessment: {}", report.overall_assessment.as_str().to_uppercase())?;
    writeln!(out)?;

    writeln!(
        out,
        "Structure: {} ({} pages, {} tables, {} images, {} text chars)",
        if structure.valid { "valid" } else { "invalid" },
        structure.summary.total_pages,
        structure.summary.total_tables,
        structure.summary.total_images,
        structure.summary.total_text_length
    )?;
    for issue in &structure.issues {
        writeln!(out, "  - {}", issue)?;
    }

    writeln!(
        out,
        "Content: {}",
        if content.is_good() { "good" } else { "warning" }
    )?;
    writeln!(
        out,
        "  Pages with text: {}/{}",
        counts.text_pages, structure.summary.total_pages
    )?;
    writeln!(
        out,
        "  Tables with data: {}/{}",
        counts.tables_with_data, counts.total_tables
    )?;
    writeln!(
        out,
        "  Images with captions: {}/{} ({})",
        counts.images_with_captions,
        counts.total_images,
        percent(counts.images_with_captions, counts.total_images)
    )?;
    writeln!(
        out,
        "  Images with bounds: {}/{} ({})",
        counts.images_with_bounds,
        counts.total_images,
        percent(counts.images_with_bounds, counts.total_images)
    )?;
    for warning in &content.warnings {
        writeln!(out, "  - {}", warning)?;
    }

    if let Some(comparison) = &report.comparison {
        writeln!(
            out,
            "Comparison: {}",
            if comparison.valid { "consistent" } else { "differences found" }
        )?;
        for difference in &comparison.differences {
            writeln!(out, "  - {}", difference)?;
        }
    }

    Ok(())
}

fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        "n/a".to_string()
    } else {
        format!("{:.1}%", part as f64 * 100.0 / total as f64)
    }
}
