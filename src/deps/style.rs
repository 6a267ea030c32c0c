//! Stylesheet (`.style`) dependency closure.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use super::DependencySet;
use super::graph::ImportGraph;
use crate::error::DependentError;
use crate::scan::{self, Grammar};

/// Resolves `using` paths against an ordered list of include directories.
#[derive(Debug, Clone, Copy)]
pub struct IncludePath<'a> {
    dirs: &'a [PathBuf],
}

impl<'a> IncludePath<'a> {
    /// Search `dirs` in order.
    #[must_use]
    pub const fn new(dirs: &'a [PathBuf]) -> Self {
        Self { dirs }
    }

    /// Resolve `import` (as written in `from`) to the first include directory
    /// containing it, canonicalized.
    ///
    /// # Errors
    ///
    /// Returns [`DependentError::UnresolvedImport`] if no include directory
    /// contains the file.
    pub fn resolve(&self, import: &str, from: &Path) -> Result<PathBuf> {
        for dir in self.dirs {
            let candidate = dir.join(import);
            if candidate.is_file() {
                return dunce::canonicalize(&candidate)
                    .with_context(|| format!("resolving {}", candidate.display()));
            }
        }
        Err(DependentError::UnresolvedImport {
            import: import.to_string(),
            from: from.to_path_buf(),
        }
        .into())
    }
}

/// Compute the transitive `using` closure of `root`.
///
/// The returned set starts with the canonical root, followed by every
/// imported file in discovery order.  Members are expanded in insertion
/// order, each exactly once; everything before `cursor` has been expanded.
///
/// # Errors
///
/// Returns [`DependentError::FileNotFound`] if `root` is missing,
/// [`DependentError::UnresolvedImport`] if an import cannot be found, or
/// [`DependentError::CyclicDependency`] if any file imports itself directly
/// or through other files.
pub fn style_dependencies(root: &Path, include_dirs: &[PathBuf]) -> Result<DependencySet> {
    if !root.is_file() {
        return Err(DependentError::not_found(root).into());
    }
    let root = dunce::canonicalize(root).with_context(|| format!("resolving {}", root.display()))?;
    let include = IncludePath::new(include_dirs);

    let mut closure = DependencySet::new();
    closure.insert(root.clone());
    let mut graph = ImportGraph::new();
    let mut cursor = 0;

    while let Some(next) = closure.get(cursor).map(Path::to_path_buf) {
        cursor += 1;
        let imports = direct_imports(&next, include)?;
        for import in &imports {
            closure.insert(import.clone());
        }
        graph.insert(next, imports);
    }

    if let Some(chain) = graph.find_cycle(&root) {
        return Err(DependentError::CyclicDependency { chain }.into());
    }
    Ok(closure)
}

/// Resolve the `using` directives of a single stylesheet, in file order.
fn direct_imports(path: &Path, include: IncludePath<'_>) -> Result<Vec<PathBuf>> {
    if !path.is_file() {
        return Err(DependentError::not_found(path).into());
    }
    scan::scan_file(Grammar::Style, path)?
        .iter()
        .map(|import| include.resolve(import, path))
        .collect()
}
