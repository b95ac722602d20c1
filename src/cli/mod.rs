//! CLI argument parsing for greenlight.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Greenlight: detect modern web-platform features in code changes.
///
/// Scans the added lines of a unified diff for CSS and JavaScript
/// features and reports them for Baseline compatibility checks.
#[derive(Parser, Debug)]
#[command(name = "greenlight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for greenlight.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a unified diff for web features.
    ///
    /// Reads the diff from a file, or from stdin when no file is given.
    Scan(ScanArgs),

    /// Detect features in a single piece of source text.
    ///
    /// The file name selects the rule set (CSS, JS or both).
    Detect(DetectArgs),

    /// List the feature signatures that can be detected.
    Features,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Path to the diff file (defaults to stdin).
    #[arg(short, long)]
    pub diff: Option<PathBuf>,

    /// Output format (text, json). Overrides the config file.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to a config file (defaults to ./.greenlight.yaml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `detect` command.
#[derive(Parser, Debug)]
pub struct DetectArgs {
    /// File name used to pick the rule set (e.g. `card.css`).
    pub file_name: String,

    /// Path to the content to scan (defaults to stdin).
    #[arg(long)]
    pub content: Option<PathBuf>,
}
