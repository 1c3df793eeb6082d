#![deny(missing_docs)]

//! # Mpatch Core
//!
//! Core library for format-preserving manifest patching.
//!
//! Loads a TOML document into a lossless syntax tree, replaces whole
//! subtrees addressed by dotted key paths, and writes the result back with
//! every untouched byte intact.

/// Shared error types.
pub mod error;

/// Manifest patching primitives.
pub mod patcher;

pub use error::{PatchError, PatchResult};
pub use patcher::{patch_file, KeyPath, Manifest, Patch};
