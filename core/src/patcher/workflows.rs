//! # Patching Workflows
//!
//! High-level recipes composing the manifest primitives.

use crate::error::PatchResult;
use crate::patcher::manifest::Manifest;
use crate::patcher::patch::Patch;
use std::path::Path;

/// Loads the manifest at `path`, applies every patch in order, and writes
/// the result back to the same path.
///
/// The write is atomic; on any failure the file keeps its prior content.
pub fn patch_file(path: &Path, patches: &[Patch]) -> PatchResult<()> {
    let mut manifest = Manifest::load(path)?;
    for patch in patches {
        manifest.apply(patch)?;
    }
    manifest.persist(path)
}
