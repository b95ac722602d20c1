//! Implementation of the `greenlight scan` command.

use super::read_input;
use crate::cli::ScanArgs;
use greenlight::config::{Config, OutputFormat};
use greenlight::error::{GreenlightError, Result};
use greenlight::scan::{Scanner, render};

/// Execute the `greenlight scan` command.
///
/// Loads config, reads the diff, scans it and prints the report to stdout.
pub fn cmd_scan(args: ScanArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(".")?,
    };

    let format = match args.format.as_deref() {
        Some(s) => OutputFormat::from_str(s).ok_or_else(|| {
            GreenlightError::UserError(format!(
                "invalid --format '{}'. Expected one of: text, json",
                s
            ))
        })?,
        None => config.output_format,
    };

    let scanner = Scanner::new(&config)?;
    let diff_text = read_input(args.diff.as_deref())?;
    let report = scanner.scan(&diff_text)?;

    print!("{}", render(&report, format)?);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
