//! Rendering scan reports for output.

use crate::config::OutputFormat;
use crate::error::{GreenlightError, Result};

use super::types::ScanReport;

/// Render a report in the requested format.
pub fn render(report: &ScanReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &ScanReport) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| GreenlightError::UserError(format!("failed to serialize report: {}", e)))
}

/// Render a report as a human-readable summary.
///
/// ```text
/// 3 feature(s) detected in 2 of 4 changed file(s)
///
/// src/styles/card.css
///   4  container-queries
///   9  grid
/// src/app.js
///   12  optional-chaining
///
/// Features: container-queries, grid, optional-chaining
/// ```
pub fn render_text(report: &ScanReport) -> String {
    if report.is_empty() {
        return format!(
            "No web features detected in {} changed file(s)\n",
            report.files_changed
        );
    }

    let mut out = format!(
        "{} feature(s) detected in {} of {} changed file(s)\n\n",
        report.total_features(),
        report.files.len(),
        report.files_changed
    );

    for file in &report.files {
        out.push_str(&file.path);
        out.push('\n');
        for hit in &file.features {
            out.push_str(&format!("  {}  {}\n", hit.line, hit.feature));
        }
    }

    let unique: Vec<&str> = report.unique_features().into_iter().collect();
    out.push_str(&format!("\nFeatures: {}\n", unique.join(", ")));

    out
}
