//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a greenlight scan.
///
/// This struct represents the contents of `.greenlight.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glob patterns (repo-relative, forward slashes) for files to skip.
    #[serde(default = "default_ignore_globs")]
    pub ignore_globs: Vec<String>,

    /// Report format when `--format` is not given.
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_globs: default_ignore_globs(),
            output_format: OutputFormat::default(),
        }
    }
}
