#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use mpatch_core::PatchError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// A failure inside the patching core.
    #[display("{_0}")]
    Patch(PatchError),

    /// The manifest discovery step failed or returned unusable output.
    /// Fatal; there is no fallback discovery strategy.
    #[display("Locator failure: {_0}")]
    Locator(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the
/// `Locator(String)` variant holds a plain message, which does not implement
/// `std::error::Error`, causing auto-derived `source()` implementations to
/// fail compilation.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
