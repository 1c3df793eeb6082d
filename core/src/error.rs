//! # Error Handling
//!
//! Provides the unified `PatchError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The core error enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum PatchError {
    /// The manifest does not exist at the resolved path.
    #[from(ignore)]
    #[display("Manifest not found: {}", _0.display())]
    NotFound(PathBuf),

    /// The manifest (or a replacement value literal) is not well-formed
    /// TOML. The wrapped error reports the line/column of the first
    /// malformed token.
    #[display("Manifest parse error: {_0}")]
    Parse(toml_edit::TomlError),

    /// An intermediate key path segment holds a value that is not a table.
    #[from(ignore)]
    #[display("Key path conflict: '{_0}' is not a table")]
    PathConflict(String),

    /// The serialized manifest could not be written back.
    /// The original file on disk is left untouched.
    #[from(ignore)]
    #[display("Write failed: {_0}")]
    Write(std::io::Error),

    /// Wrapper for other IO errors (reading the manifest).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because variants
/// such as `General(String)` hold payloads that are not errors themselves,
/// which trips auto-derived `source()` implementations.
impl std::error::Error for PatchError {}

/// Helper type alias for Result using PatchError.
pub type PatchResult<T> = Result<T, PatchError>;
