//! The shared "something changed" marker read by the build system.
use anyhow::{Context as _, Result};
use std::path::Path;

use super::{Stamp, StampChange, StampState, mtime};

/// Content written when the marker is created.
pub const PLACEHOLDER: &str = "1";

/// Marker file reconciled once per run.
///
/// Created with [`PLACEHOLDER`] content if absent; otherwise touched only
/// when at least one input was updated during the run.
#[derive(Debug, Clone, Copy)]
pub struct MarkerFile<'a> {
    path: &'a Path,
    inputs_modified: bool,
}

impl<'a> MarkerFile<'a> {
    /// Track the marker at `path` for a run whose inputs were (or were not)
    /// modified.
    #[must_use]
    pub const fn new(path: &'a Path, inputs_modified: bool) -> Self {
        Self {
            path,
            inputs_modified,
        }
    }
}

impl Stamp for MarkerFile<'_> {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn current_state(&self) -> Result<StampState> {
        if !self.path.is_file() {
            return Ok(StampState::Missing);
        }
        Ok(if self.inputs_modified {
            StampState::Stale
        } else {
            StampState::Fresh
        })
    }

    fn apply(&self) -> Result<StampChange> {
        match self.current_state()? {
            StampState::Missing => {
                crate::fs::ensure_parent_dir(self.path)?;
                std::fs::write(self.path, PLACEHOLDER)
                    .with_context(|| format!("creating {}", self.path.display()))?;
                Ok(StampChange::Created)
            }
            StampState::Stale => {
                mtime::touch(self.path)?;
                Ok(StampChange::Touched)
            }
            StampState::Fresh => Ok(StampChange::Unchanged),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use filetime::FileTime;

    fn mtime_of(path: &Path) -> FileTime {
        FileTime::from_last_modification_time(&std::fs::metadata(path).unwrap())
    }

    #[test]
    fn absent_marker_is_created_even_without_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changed.timestamp");
        let marker = MarkerFile::new(&path, false);
        assert_eq!(marker.apply().unwrap(), StampChange::Created);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), PLACEHOLDER);
    }

    #[test]
    fn absent_marker_parent_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("gen").join("changed");
        assert_eq!(
            MarkerFile::new(&path, true).apply().unwrap(),
            StampChange::Created
        );
        assert!(path.is_file());
    }

    #[test]
    fn present_marker_untouched_without_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changed");
        std::fs::write(&path, "previous").unwrap();
        filetime::set_file_mtime(&path, FileTime::from_unix_time(1_000, 0)).unwrap();

        let marker = MarkerFile::new(&path, false);
        assert!(!marker.needs_change().unwrap());
        assert_eq!(marker.apply().unwrap(), StampChange::Unchanged);
        assert_eq!(mtime_of(&path), FileTime::from_unix_time(1_000, 0));
    }

    #[test]
    fn present_marker_touched_after_changes_keeps_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changed");
        std::fs::write(&path, "previous").unwrap();
        filetime::set_file_mtime(&path, FileTime::from_unix_time(1_000, 0)).unwrap();

        assert_eq!(
            MarkerFile::new(&path, true).apply().unwrap(),
            StampChange::Touched
        );
        assert!(mtime_of(&path) > FileTime::from_unix_time(1_000, 0));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");
    }
}
