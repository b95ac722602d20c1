//! Core diff parsing logic.

use crate::error::{GreenlightError, Result};
use tracing::debug;

use super::api::{Change, ChangeKind, DiffFile, Hunk};
use super::helpers::{normalize_path, parse_diff_git_line, parse_hunk_header, parse_marker_path};

const FILE_DELIMITER: &str = "diff --git ";

/// Parse raw diff text into file records.
///
/// Text before the first file delimiter (e.g. a `format-patch` preamble)
/// is ignored. Empty or whitespace-only input yields no files.
pub(super) fn parse_diff(diff_text: &str) -> Result<Vec<DiffFile>> {
    if diff_text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let sections = split_sections(diff_text);
    if sections.is_empty() {
        return Err(GreenlightError::ParseError(
            "input contains no 'diff --git' file sections".to_string(),
        ));
    }

    let files: Vec<DiffFile> = sections.iter().map(|s| parse_section(s)).collect();
    debug!(files = files.len(), "parsed diff");

    Ok(files)
}

/// Split diff text into one line group per `diff --git` delimiter.
fn split_sections(diff_text: &str) -> Vec<Vec<&str>> {
    let mut sections = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in diff_text.lines() {
        if line.starts_with(FILE_DELIMITER) {
            sections.extend(current.take());
            current = Some(vec![line]);
        } else if let Some(section) = current.as_mut() {
            section.push(line);
        }
    }

    sections.extend(current);
    sections
}

/// Parse one file section. The first line is the `diff --git` delimiter.
fn parse_section(lines: &[&str]) -> DiffFile {
    let mut file = DiffFile::default();

    if let Some((from, to)) = lines
        .first()
        .and_then(|l| l.strip_prefix(FILE_DELIMITER))
        .and_then(parse_diff_git_line)
    {
        file.from = Some(from);
        file.to = Some(to);
    }

    let mut in_hunks = false;
    let mut current: Option<Hunk> = None;

    for line in lines.iter().skip(1) {
        if line.starts_with("@@") {
            in_hunks = true;
            file.hunks.extend(current.take());

            match parse_hunk_header(line) {
                Some(range) => {
                    current = Some(Hunk {
                        old_start: range.old_start,
                        old_lines: range.old_lines,
                        new_start: range.new_start,
                        new_lines: range.new_lines,
                        changes: Vec::new(),
                    });
                }
                None => debug!(header = *line, "skipping malformed hunk"),
            }
            continue;
        }

        if !in_hunks {
            apply_header_line(&mut file, line);
            continue;
        }

        // Lines following a malformed header belong to a skipped hunk
        if let Some(hunk) = current.as_mut()
            && let Some(change) = parse_change(line)
        {
            hunk.changes.push(change);
        }
    }

    file.hunks.extend(current);
    file
}

/// Apply an extended header line (between the delimiter and the first hunk).
fn apply_header_line(file: &mut DiffFile, line: &str) {
    if line.starts_with("new file mode") {
        file.new = true;
        file.from = None;
    } else if line.starts_with("deleted file mode") {
        file.deleted = true;
        file.to = None;
    } else if let Some(path) = line.strip_prefix("rename from ") {
        file.from = Some(normalize_path(path));
    } else if let Some(path) = line.strip_prefix("rename to ") {
        file.to = Some(normalize_path(path));
    } else if let Some(rest) = line.strip_prefix("--- ") {
        file.from = parse_marker_path(rest);
        if file.from.is_none() {
            file.new = true;
        }
    } else if let Some(rest) = line.strip_prefix("+++ ") {
        file.to = parse_marker_path(rest);
        if file.to.is_none() {
            file.deleted = true;
        }
    } else if line.starts_with("Binary files ") || line.starts_with("GIT binary patch") {
        file.binary = true;
    }
    // Ignore other headers (index, mode changes, similarity index, etc.)
}

/// Classify a hunk line by its leading marker.
///
/// Returns None for `\ No newline at end of file` markers.
fn parse_change(line: &str) -> Option<Change> {
    if let Some(content) = line.strip_prefix('+') {
        Some(Change::new(ChangeKind::Add, content))
    } else if let Some(content) = line.strip_prefix('-') {
        Some(Change::new(ChangeKind::Delete, content))
    } else if line.starts_with('\\') {
        None
    } else {
        // Context line; tolerate tools that strip the space from blank lines
        let content = line.strip_prefix(' ').unwrap_or(line);
        Some(Change::new(ChangeKind::Context, content))
    }
}
