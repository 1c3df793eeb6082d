#![deny(missing_docs)]

//! # Manifest Locator
//!
//! Resolves the manifest to patch by querying `cargo locate-project`.
//!
//! Abstracted behind a trait so commands can be driven by a stub in tests
//! without requiring a Cargo workspace on disk.

use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Command;

/// Interface for resolving the target manifest path.
pub trait ManifestLocator {
    /// Resolves the absolute path of the manifest to patch.
    fn locate(&self) -> CliResult<PathBuf>;
}

/// The JSON payload `cargo locate-project` prints.
#[derive(Debug, Deserialize)]
struct ProjectLocation {
    root: PathBuf,
}

/// Locator backed by `cargo locate-project`.
#[derive(Debug, Clone)]
pub struct CargoLocator {
    /// Query the workspace root manifest instead of the nearest package.
    pub workspace: bool,
}

impl Default for CargoLocator {
    fn default() -> Self {
        Self { workspace: true }
    }
}

impl ManifestLocator for CargoLocator {
    fn locate(&self) -> CliResult<PathBuf> {
        let mut command = Command::new("cargo");
        command.args(["locate-project", "--message-format", "json"]);
        if self.workspace {
            command.arg("--workspace");
        }

        let output = command
            .output()
            .map_err(|e| CliError::Locator(format!("Failed to invoke cargo: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CliError::Locator(format!(
                "cargo locate-project failed with status {}: {}",
                output.status, stderr
            )));
        }

        parse_location(&output.stdout)
    }
}

/// Decodes the `root` field out of the locate-project payload.
fn parse_location(stdout: &[u8]) -> CliResult<PathBuf> {
    let location: ProjectLocation = serde_json::from_slice(stdout)
        .map_err(|e| CliError::Locator(format!("Unexpected locate-project output: {}", e)))?;
    Ok(location.root)
}
