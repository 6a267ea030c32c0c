//! Resource manifest (`.qrc`) dependencies.
use anyhow::{Context as _, Result};
use std::path::Path;

use super::DependencySet;
use crate::error::DependentError;
use crate::scan::{self, Grammar};

/// Collect the files embedded by `manifest`.
///
/// Each `<file>` entry is resolved against the manifest's own directory; the
/// manifest path is made absolute first, so every returned path is absolute.
/// Referenced files are not required to exist.
///
/// # Errors
///
/// Returns [`DependentError::FileNotFound`] if `manifest` is not a file, or an
/// error if it cannot be read.
pub fn manifest_dependencies(manifest: &Path) -> Result<DependencySet> {
    if !manifest.is_file() {
        return Err(DependentError::not_found(manifest).into());
    }
    let manifest = std::path::absolute(manifest)
        .with_context(|| format!("resolving {}", manifest.display()))?;
    let dir = manifest.parent().unwrap_or_else(|| Path::new(""));

    Ok(scan::scan_file(Grammar::Manifest, &manifest)?
        .into_iter()
        .map(|entry| dir.join(entry))
        .collect())
}
