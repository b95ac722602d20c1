//! Unified diff parsing for greenlight.
//!
//! This module turns raw `diff --git` text into structured per-file records
//! and projects the added lines of each file with their new-file line numbers.
//!
//! The parsing is deterministic and supports:
//! - Multiple file sections, returned in input order
//! - New files (from /dev/null) and deleted files (to /dev/null)
//! - Renames, mode-only changes and binary files (no hunks)
//! - Hunk headers with or without line counts
//!
//! Malformed hunk headers are skipped rather than failing the whole parse.
//! Only input with no file sections at all is rejected.

mod api;
mod helpers;
mod parser;


// Re-export public API
pub use api::{AddedLine, Change, ChangeKind, DiffFile, Hunk, added_lines, parse};
