#![deny(missing_docs)]

//! # Locate Command
//!
//! Prints the manifest path the discovery step resolves, without patching
//! anything. Useful for checking what `apply` would touch.

use crate::error::CliResult;
use crate::locator::ManifestLocator;

/// Executes the locate command.
pub fn execute(locator: &impl ManifestLocator) -> CliResult<()> {
    let path = locator.locate()?;
    println!("{}", path.display());
    Ok(())
}
