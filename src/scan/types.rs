//! Core types for scan results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A detected feature and where it first appears in the added lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureHit {
    /// Feature identifier, e.g. `container-queries`.
    pub feature: String,
    /// Line number in the new file (1-based).
    pub line: usize,
}

/// Features detected in one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Repository-relative destination path (forward slashes).
    pub path: String,
    /// Number of added lines that were scanned.
    pub added_lines: usize,
    /// Detected features in catalogue order.
    pub features: Vec<FeatureHit>,
}

/// Result of scanning a whole diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub scanned_at: DateTime<Utc>,
    /// File sections in the diff.
    pub files_changed: usize,
    /// Files whose added lines were run through detection.
    pub files_scanned: usize,
    /// Files with at least one detected feature, in diff order.
    pub files: Vec<FileReport>,
}

impl ScanReport {
    /// Create an empty report for a diff with `files_changed` sections.
    pub fn new(files_changed: usize) -> Self {
        Self {
            scanned_at: Utc::now(),
            files_changed,
            files_scanned: 0,
            files: Vec::new(),
        }
    }

    /// Feature occurrences summed over files (a feature counts once per file).
    pub fn total_features(&self) -> usize {
        self.files.iter().map(|f| f.features.len()).sum()
    }

    /// Distinct feature identifiers across all files, sorted.
    pub fn unique_features(&self) -> BTreeSet<&str> {
        self.files
            .iter()
            .flat_map(|f| f.features.iter().map(|h| h.feature.as_str()))
            .collect()
    }

    /// Whether nothing was detected.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
