#![deny(missing_docs)]

//! # Apply Command
//!
//! Applies declarative section replacements to the manifest.
//!
//! 1. **Locate**: `--manifest` override, or the injected discovery step.
//! 2. **Patch**: every `--set KEY_PATH=TOML_VALUE` pair, in order.
//! 3. **Persist**: atomic write-then-rename back to the same path.

use crate::error::CliResult;
use crate::locator::ManifestLocator;
use mpatch_core::{patch_file, Patch};
use std::path::PathBuf;

/// Arguments for the apply command.
#[derive(clap::Args, Debug, Clone)]
pub struct ApplyArgs {
    /// Patch the manifest at this path instead of asking cargo.
    #[clap(long)]
    pub manifest: Option<PathBuf>,

    /// Section replacement to apply, repeatable.
    /// Format: `"key.path=TOML_VALUE"`.
    /// Example: `--set 'bin=[{ name = "pyw", path = "src/main.rs" }]'`
    #[clap(long, value_parser = parse_key_val, required = true)]
    pub set: Vec<(String, String)>,
}

/// Helper to parse "key=value" arguments.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Executes the apply command.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `locator` - The discovery mechanism (use `CargoLocator` for real runs).
pub fn execute(args: &ApplyArgs, locator: &impl ManifestLocator) -> CliResult<()> {
    let manifest_path = match &args.manifest {
        Some(path) => path.clone(),
        None => locator.locate()?,
    };

    println!("Patching {:?}...", manifest_path);

    let mut patches = Vec::with_capacity(args.set.len());
    for (path, value) in &args.set {
        patches.push(Patch::parse(path, value)?);
    }

    patch_file(&manifest_path, &patches)?;

    println!("Manifest updated: {:?}", manifest_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use tempfile::tempdir;

    struct FixedLocator(PathBuf);

    impl ManifestLocator for FixedLocator {
        fn locate(&self) -> CliResult<PathBuf> {
            Ok(self.0.clone())
        }
    }

    struct FailingLocator;

    impl ManifestLocator for FailingLocator {
        fn locate(&self) -> CliResult<PathBuf> {
            Err(CliError::Locator("discovery unavailable".into()))
        }
    }

    const MANIFEST: &str = "[package]\nname = \"demo\"\n\n[dependencies]\nfoo = \"1.0\"\n";

    #[test]
    fn test_execute_patches_located_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, MANIFEST).unwrap();

        let args = ApplyArgs {
            manifest: None,
            set: vec![("package.name".to_string(), "\"renamed\"".to_string())],
        };
        execute(&args, &FixedLocator(path.clone())).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("name = \"renamed\""));
        assert!(written.contains("foo = \"1.0\""));
    }

    #[test]
    fn test_execute_manifest_override_skips_locator() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, MANIFEST).unwrap();

        let args = ApplyArgs {
            manifest: Some(path.clone()),
            set: vec![(
                "bin".to_string(),
                "[{ name = \"pyw\", path = \"src/main.rs\" }]".to_string(),
            )],
        };
        // FailingLocator proves the override never consults discovery
        execute(&args, &FailingLocator).unwrap();

        assert!(fs::read_to_string(&path).unwrap().contains("[[bin]]"));
    }

    #[test]
    fn test_execute_propagates_locator_failure() {
        let args = ApplyArgs {
            manifest: None,
            set: vec![("a".to_string(), "1".to_string())],
        };
        let err = execute(&args, &FailingLocator).unwrap_err();
        assert!(matches!(err, CliError::Locator(_)));
    }

    #[test]
    fn test_execute_rejects_bad_value_and_keeps_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, MANIFEST).unwrap();

        let args = ApplyArgs {
            manifest: Some(path.clone()),
            set: vec![("bin".to_string(), "[not toml".to_string())],
        };
        assert!(execute(&args, &FailingLocator).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), MANIFEST);
    }

    #[test]
    fn test_argument_parsing() {
        let valid = parse_key_val("bin=[{ name = \"pyw\" }]").unwrap();
        assert_eq!(valid.0, "bin");
        assert_eq!(valid.1, "[{ name = \"pyw\" }]");

        let invalid = parse_key_val("invalid");
        assert!(invalid.is_err());
    }
}
