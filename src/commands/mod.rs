//! Command implementations for greenlight.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod detect;
mod features;
mod scan;

use crate::cli::Command;
use greenlight::error::{GreenlightError, Result};
use std::io::Read;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Scan(args) => scan::cmd_scan(args),
        Command::Detect(args) => detect::cmd_detect(args),
        Command::Features => features::cmd_features(),
    }
}

/// Read text from `path`, or from stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            GreenlightError::UserError(format!("failed to read '{}': {}", path.display(), e))
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| GreenlightError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(buf)
        }
    }
}
