//! Implementation of the `greenlight features` command.

use greenlight::detect::catalogue;
use greenlight::error::Result;

/// Execute the `greenlight features` command.
pub fn cmd_features() -> Result<()> {
    for sig in catalogue() {
        println!("{:<20} {:<4} {}", sig.id(), sig.domain(), sig.summary());
    }

    Ok(())
}
