//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{GreenlightError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use tracing::debug;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".greenlight.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(GreenlightError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GreenlightError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config");
        Self::from_yaml(&content)
    }

    /// Load `.greenlight.yaml` from `dir` if present, otherwise use defaults.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);

        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            GreenlightError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            GreenlightError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `ignore_globs` entries must be non-empty valid globs
    pub fn validate(&self) -> Result<()> {
        for (i, pattern) in self.ignore_globs.iter().enumerate() {
            if pattern.trim().is_empty() {
                return Err(GreenlightError::ConfigError(format!(
                    "ignore_globs[{}] must be non-empty",
                    i
                )));
            }
            Glob::new(&normalize_glob(pattern)).map_err(|e| {
                GreenlightError::ConfigError(format!(
                    "invalid glob in ignore_globs: '{}' - {}",
                    pattern, e
                ))
            })?;
        }

        Ok(())
    }

    /// Compile `ignore_globs` into a matcher.
    pub fn ignore_matcher(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        for pattern in &self.ignore_globs {
            let glob = Glob::new(&normalize_glob(pattern)).map_err(|e| {
                GreenlightError::ConfigError(format!(
                    "invalid glob in ignore_globs: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        builder
            .build()
            .map_err(|e| GreenlightError::ConfigError(format!("failed to build ignore globs: {}", e)))
    }
}

fn normalize_glob(pattern: &str) -> String {
    pattern.trim().replace('\\', "/")
}
