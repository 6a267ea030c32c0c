//! Timestamp reconciliation primitives (check + apply pattern).
//!
//! A [`Stamp`] is a file whose modification time must be moved forward when
//! something it stands for has changed: a stale manifest or stylesheet
//! ([`DependentFile`]) or the build system's marker ([`MarkerFile`]).
pub mod dependent;
pub mod marker;
pub mod mtime;

pub use dependent::DependentFile;
pub use marker::MarkerFile;

use anyhow::Result;

/// State of a stamped file.
///
/// # Examples
///
/// ```
/// use update_dependent::stamp::StampState;
///
/// assert_ne!(StampState::Fresh, StampState::Stale);
/// assert_eq!(StampState::Missing, StampState::Missing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampState {
    /// The file does not exist yet.
    Missing,
    /// Nothing the file depends on is newer than it.
    Fresh,
    /// The file must be touched.
    Stale,
}

/// Result of applying a stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampChange {
    /// The file was created.
    Created,
    /// The file's modification time was set to now.
    Touched,
    /// The file was left alone.
    Unchanged,
}

impl StampChange {
    /// Whether the filesystem was modified.
    #[must_use]
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// A file whose timestamp is reconciled against something else.
pub trait Stamp {
    /// Human-readable description used in log output.
    fn description(&self) -> String;

    /// Check the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing or its metadata cannot
    /// be read.
    fn current_state(&self) -> Result<StampState>;

    /// Bring the file up to date.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined or the file cannot
    /// be created or touched.
    fn apply(&self) -> Result<StampChange>;

    /// Whether [`apply`](Self::apply) would change anything.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`current_state`](Self::current_state).
    fn needs_change(&self) -> Result<bool> {
        Ok(matches!(
            self.current_state()?,
            StampState::Missing | StampState::Stale
        ))
    }
}
