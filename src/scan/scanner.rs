//! Scanning a diff for web features.

use crate::config::Config;
use crate::detect::{ExtensionClass, classify_extension, detect_features, signature};
use crate::diff::{self, AddedLine, DiffFile};
use crate::error::Result;
use globset::GlobSet;
use tracing::{debug, info};

use super::types::{FeatureHit, FileReport, ScanReport};

/// Scans diffs with a fixed set of ignore globs.
///
/// Create once and reuse for multiple diffs.
#[derive(Debug)]
pub struct Scanner {
    ignore: GlobSet,
}

impl Scanner {
    /// Build a scanner from config.
    ///
    /// # Returns
    ///
    /// * `Ok(Scanner)` - Ready to scan
    /// * `Err(GreenlightError::ConfigError)` - An ignore glob fails to compile
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            ignore: config.ignore_matcher()?,
        })
    }

    /// Parse `diff_text` and detect features in every eligible file.
    ///
    /// # Returns
    ///
    /// * `Ok(ScanReport)` - Report (empty for diffs without textual changes)
    /// * `Err(GreenlightError::ParseError)` - Input is not a unified diff
    pub fn scan(&self, diff_text: &str) -> Result<ScanReport> {
        let files = diff::parse(diff_text)?;
        let mut report = ScanReport::new(files.len());

        for file in &files {
            let Some(file_report) = self.scan_file(file) else {
                continue;
            };

            report.files_scanned += 1;
            if !file_report.features.is_empty() {
                report.files.push(file_report);
            }
        }

        info!(
            files_changed = report.files_changed,
            files_scanned = report.files_scanned,
            features = report.total_features(),
            "scan complete"
        );

        Ok(report)
    }

    /// Detect features in one parsed file.
    ///
    /// Returns None when the file is not scanned: deleted, binary, ignored,
    /// unrecognized extension, or no added lines.
    pub fn scan_file(&self, file: &DiffFile) -> Option<FileReport> {
        let path = match (&file.to, file.deleted) {
            (Some(path), false) => path,
            _ => return None,
        };

        if file.binary {
            debug!(path = %path, "skipping binary file");
            return None;
        }

        if self.ignore.is_match(path) {
            debug!(path = %path, "skipping ignored file");
            return None;
        }

        if classify_extension(path) == ExtensionClass::Unrecognized {
            return None;
        }

        let added = file.added_lines();
        if added.is_empty() {
            return None;
        }

        let content = added
            .iter()
            .map(|l| l.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let features = detect_features(path, &content)
            .into_iter()
            .map(|id| FeatureHit {
                feature: id.to_string(),
                line: locate(id, &added),
            })
            .collect();

        Some(FileReport {
            path: path.clone(),
            added_lines: added.len(),
            features,
        })
    }
}

/// Scan a diff with a one-off scanner built from `config`.
pub fn scan_diff(diff_text: &str, config: &Config) -> Result<ScanReport> {
    Scanner::new(config)?.scan(diff_text)
}

/// First added line whose own content matches the feature.
///
/// Falls back to the first added line when the match spans lines.
fn locate(id: &str, added: &[AddedLine]) -> usize {
    signature(id)
        .and_then(|sig| added.iter().find(|l| sig.is_match(&l.content)))
        .or_else(|| added.first())
        .map(|l| l.line_number)
        .unwrap_or_default()
}
