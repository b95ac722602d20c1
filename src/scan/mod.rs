//! Diff scanning for greenlight.
//!
//! Composes diff parsing and feature detection:
//! - Parse the diff and keep files that still exist after the change
//! - Skip binary files, ignored paths, and files without added lines
//! - Detect features in the joined added text of each file
//! - Locate each feature at the first added line that shows it
//!
//! Baseline status lookup, scoring and blocking policy belong to the
//! consumers of the resulting [`ScanReport`].

mod render;
mod scanner;
mod types;


// Re-export public API
pub use render::{render, render_json, render_text};
pub use scanner::{Scanner, scan_diff};
pub use types::{FeatureHit, FileReport, ScanReport};
