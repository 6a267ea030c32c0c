//! Modification-time helpers.
use anyhow::Result;
use filetime::FileTime;
use std::path::Path;
use std::time::SystemTime;

use crate::error::DependentError;

/// Modification time of the regular file at `path`.
///
/// # Errors
///
/// Returns [`DependentError::FileNotFound`] if `path` is not a file, or
/// [`DependentError::Io`] if its metadata cannot be read.
pub fn modified(path: &Path) -> Result<SystemTime> {
    if !path.is_file() {
        return Err(DependentError::not_found(path).into());
    }
    let time = path
        .metadata()
        .and_then(|m| m.modified())
        .map_err(|e| DependentError::io(path, e))?;
    Ok(time)
}

/// Latest modification time among `paths`, or `None` for an empty input.
///
/// # Errors
///
/// Fails on the first path that is missing or unreadable.
pub fn newest<'a, I>(paths: I) -> Result<Option<SystemTime>>
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut latest = None;
    for path in paths {
        let time = modified(path)?;
        if latest.is_none_or(|l| time > l) {
            latest = Some(time);
        }
    }
    Ok(latest)
}

/// Set both access and modification time of `path` to now.
///
/// # Errors
///
/// Returns [`DependentError::Io`] if the times cannot be set.
pub fn touch(path: &Path) -> Result<()> {
    let now = FileTime::now();
    filetime::set_file_times(path, now, now).map_err(|e| DependentError::io(path, e))?;
    Ok(())
}
