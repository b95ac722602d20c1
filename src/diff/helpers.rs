//! Helper functions for diff parsing.

/// Line ranges declared by a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct HunkRange {
    pub old_start: usize,
    pub old_lines: usize,
    pub new_start: usize,
    pub new_lines: usize,
}

/// Parse the paths from a "diff --git" line (without the prefix).
///
/// Handles various formats:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path/to/file b/path/to/renamed" (rename)
/// - "a/dir with space/f b/dir with space/f" (spaces in paths)
///
/// Returns `(old_path, new_path)` with prefixes stripped, or None if parsing fails.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<(String, String)> {
    // Paths can contain spaces, so split on the last " b/" occurrence
    if let Some(b_pos) = rest.rfind(" b/") {
        let a_part = &rest[..b_pos];
        let b_part = &rest[b_pos + 1..];
        return Some((strip_path_prefix(a_part), strip_path_prefix(b_part)));
    }

    // Fallback: two whitespace-separated paths without a/ b/ prefixes
    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() == 2 {
        return Some((strip_path_prefix(parts[0]), strip_path_prefix(parts[1])));
    }

    None
}

/// Parse the path of a `---` or `+++` header line (without the marker).
///
/// Returns None for `/dev/null`.
pub(super) fn parse_marker_path(rest: &str) -> Option<String> {
    // Some tools append a tab-separated timestamp
    let path = rest.split('\t').next().unwrap_or(rest).trim_end();

    if path == "/dev/null" {
        return None;
    }

    Some(strip_path_prefix(path))
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@"
/// Also handles: "@@ -old_start,old_len +new_start,new_len @@ context info"
///
/// Omitted lengths default to 1. Returns None if parsing fails.
pub(super) fn parse_hunk_header(line: &str) -> Option<HunkRange> {
    let line = line.strip_prefix("@@ ")?;

    // Find the closing " @@"
    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];

    let parts: Vec<&str> = range_part.split_whitespace().collect();
    if parts.len() != 2 {
        return None;
    }

    let (old_start, old_lines) = parse_range(parts[0].strip_prefix('-')?)?;
    let (new_start, new_lines) = parse_range(parts[1].strip_prefix('+')?)?;

    // Ranges running past usize::MAX cannot be counted through
    old_start.checked_add(old_lines)?;
    new_start.checked_add(new_lines)?;

    Some(HunkRange {
        old_start,
        old_lines,
        new_start,
        new_lines,
    })
}

/// Parse a range specification.
///
/// Format: "start" or "start,len"
fn parse_range(range: &str) -> Option<(usize, usize)> {
    match range.split_once(',') {
        Some((start, len)) => Some((start.parse().ok()?, len.parse().ok()?)),
        None => Some((range.parse().ok()?, 1)),
    }
}

/// Strip a leading `a/` or `b/` and surrounding quotes, normalizing slashes.
fn strip_path_prefix(path: &str) -> String {
    let path = path.trim_matches('"');
    let path = path
        .strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path);
    normalize_path(path)
}

/// Normalize a file path to use forward slashes.
///
/// This ensures consistent path format for glob matching,
/// regardless of the platform where the diff was generated.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
