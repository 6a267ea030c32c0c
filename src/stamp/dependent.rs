//! Manifests and stylesheets touched when a dependency is newer.
use anyhow::Result;
use std::path::Path;

use super::{Stamp, StampChange, StampState, mtime};

/// A file that is stale when any of its dependencies was modified after it.
#[derive(Debug, Clone)]
pub struct DependentFile<'a> {
    target: &'a Path,
    dependencies: Vec<&'a Path>,
}

impl<'a> DependentFile<'a> {
    /// Track `target` against `dependencies`.
    ///
    /// `target` itself is ignored if it appears among the dependencies.
    pub fn new<I>(target: &'a Path, dependencies: I) -> Self
    where
        I: IntoIterator<Item = &'a Path>,
    {
        Self {
            target,
            dependencies: dependencies
                .into_iter()
                .filter(|dep| *dep != target)
                .collect(),
        }
    }

    /// Number of dependencies compared against the target.
    #[must_use]
    pub const fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}

impl Stamp for DependentFile<'_> {
    fn description(&self) -> String {
        self.target.display().to_string()
    }

    fn current_state(&self) -> Result<StampState> {
        let own = mtime::modified(self.target)?;
        let newest = mtime::newest(self.dependencies.iter().copied())?;
        Ok(match newest {
            Some(dep) if dep > own => StampState::Stale,
            _ => StampState::Fresh,
        })
    }

    fn apply(&self) -> Result<StampChange> {
        if self.current_state()? == StampState::Stale {
            mtime::touch(self.target)?;
            return Ok(StampChange::Touched);
        }
        Ok(StampChange::Unchanged)
    }
}
