//! Configuration types and defaults for greenlight.

use serde::{Deserialize, Serialize};

/// How scan reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable summary (default).
    #[default]
    Text,
    /// Pretty-printed JSON report for downstream tooling.
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Default globs for files that are never scanned (vendored and minified output).
pub fn default_ignore_globs() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/*.min.js".to_string(),
        "**/*.min.css".to_string(),
    ]
}
