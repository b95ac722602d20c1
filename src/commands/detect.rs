//! Implementation of the `greenlight detect` command.

use super::read_input;
use crate::cli::DetectArgs;
use greenlight::detect::{ExtensionClass, classify_extension, detect_features};
use greenlight::error::Result;
use tracing::warn;

/// Execute the `greenlight detect` command.
///
/// Prints one feature identifier per line.
pub fn cmd_detect(args: DetectArgs) -> Result<()> {
    if classify_extension(&args.file_name) == ExtensionClass::Unrecognized {
        warn!(file = %args.file_name, "unrecognized extension; no rule set applies");
    }

    let content = read_input(args.content.as_deref())?;

    for feature in detect_features(&args.file_name, &content) {
        println!("{}", feature);
    }

    Ok(())
}
