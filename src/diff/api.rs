//! Public API for diff parsing.

use crate::error::Result;

use super::parser::parse_diff;

/// Kind of a single diff line inside a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Unchanged line present in both versions (leading ' ').
    Context,
    /// Line added in the new version (leading '+').
    Add,
    /// Line removed from the old version (leading '-').
    Delete,
}

/// One physical line of a hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    /// Line text without the leading marker.
    pub content: String,
}

impl Change {
    pub fn new(kind: ChangeKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// A contiguous change region introduced by an `@@ ... @@` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// Start line in the old file.
    pub old_start: usize,
    /// Number of old-file lines covered (1 when omitted from the header).
    pub old_lines: usize,
    /// Start line in the new file.
    pub new_start: usize,
    /// Number of new-file lines covered (1 when omitted from the header).
    pub new_lines: usize,
    /// Lines of the hunk in diff order.
    pub changes: Vec<Change>,
}

/// One file section of a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffFile {
    /// Source path (forward slashes, no `a/` prefix). `None` for created files.
    pub from: Option<String>,
    /// Destination path (forward slashes, no `b/` prefix). `None` for deleted files.
    pub to: Option<String>,
    /// The file was deleted.
    pub deleted: bool,
    /// The file was created.
    pub new: bool,
    /// The section describes a binary file.
    pub binary: bool,
    /// Hunks in diff order. Empty for binary, rename-only and mode-only changes.
    pub hunks: Vec<Hunk>,
}

impl DiffFile {
    /// The path this file is known by after the change, or before it for deletions.
    pub fn path(&self) -> Option<&str> {
        self.to.as_deref().or(self.from.as_deref())
    }

    /// Number of added lines across all hunks.
    pub fn additions(&self) -> usize {
        self.count(ChangeKind::Add)
    }

    /// Number of deleted lines across all hunks.
    pub fn deletions(&self) -> usize {
        self.count(ChangeKind::Delete)
    }

    /// Added lines with their new-file line numbers. See [`added_lines`].
    pub fn added_lines(&self) -> Vec<AddedLine> {
        added_lines(self)
    }

    fn count(&self, kind: ChangeKind) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.changes)
            .filter(|c| c.kind == kind)
            .count()
    }
}

/// Represents a single added line from a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedLine {
    /// Line number in the new file (1-based).
    pub line_number: usize,
    /// The content of the added line (without leading '+').
    pub content: String,
}

/// Parse unified diff text into file records, in input order.
///
/// # Arguments
///
/// * `diff_text` - Raw diff text using `diff --git a/<path> b/<path>` file delimiters
///
/// # Returns
///
/// * `Ok(Vec<DiffFile>)` - One record per file section (empty for empty input)
/// * `Err(GreenlightError::ParseError)` - Non-empty input without any file section
///
/// # Example
///
/// ```
/// let diff = "diff --git a/a.css b/a.css\n--- a/a.css\n+++ b/a.css\n@@ -0,0 +1 @@\n+a {}\n";
/// let files = greenlight::diff::parse(diff).unwrap();
/// assert_eq!(files[0].to.as_deref(), Some("a.css"));
/// ```
pub fn parse(diff_text: &str) -> Result<Vec<DiffFile>> {
    parse_diff(diff_text)
}

/// Extract the added lines of a file with their new-file line numbers.
///
/// Each hunk starts counting at its declared new-file start. Context and
/// added lines advance the counter; deleted lines do not.
pub fn added_lines(file: &DiffFile) -> Vec<AddedLine> {
    let mut result = Vec::new();

    for hunk in &file.hunks {
        let mut new_line = hunk.new_start;

        for change in &hunk.changes {
            match change.kind {
                ChangeKind::Add => {
                    result.push(AddedLine {
                        line_number: new_line,
                        content: change.content.clone(),
                    });
                    new_line = new_line.saturating_add(1);
                }
                ChangeKind::Context => new_line = new_line.saturating_add(1),
                // Removed line - only the old-file counter would move
                ChangeKind::Delete => {}
            }
        }
    }

    result
}
