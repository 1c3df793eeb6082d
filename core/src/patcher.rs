#![deny(missing_docs)]

//! # Manifest Patching
//!
//! Utilities for mutating TOML manifests without disturbing the formatting
//! of untouched nodes.
//!
//! - **key_path**: Dotted key paths addressing a subtree.
//! - **patch**: Declarative whole-subtree replacements.
//! - **manifest**: The lossless document: load, apply, persist.
//! - **workflows**: High-level patching recipes (load -> apply -> persist).

/// Key path addressing.
pub mod key_path;

/// The lossless manifest document.
pub mod manifest;

/// Declarative subtree replacement.
pub mod patch;

/// High-level patching workflows.
pub mod workflows;

pub use key_path::KeyPath;
pub use manifest::Manifest;
pub use patch::Patch;
pub use workflows::patch_file;
