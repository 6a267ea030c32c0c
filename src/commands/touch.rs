//! `qrc` and `style`: touch stale inputs, then reconcile the marker.
use anyhow::Result;
use std::path::{Path, PathBuf};

use super::Outcome;
use crate::config::{FileType, Options};
use crate::deps::{DependencySet, qrc, style};
use crate::error::DependentError;
use crate::logging::Logger;
use crate::stamp::{DependentFile, MarkerFile, Stamp as _};

/// Process every input, then create or touch the marker file.
///
/// # Errors
///
/// Returns the first discovery or stamping error; inputs after the failing
/// one are not processed and the marker is left alone.
pub fn run(options: &Options, log: &Logger) -> Result<Outcome> {
    let marker_path = options
        .marker()
        .ok_or_else(|| DependentError::MissingOutputFile {
            mode: options.file_type.to_string(),
        })?;

    log.stage(&format!("Checking {} input(s)", options.inputs.len()));
    let mut outcome = Outcome::default();
    for input in &options.inputs {
        let result = match options.file_type {
            FileType::Style => handle_style(input, &options.include_dirs, log)?,
            FileType::Qrc | FileType::QrcList => handle_qrc(input, log)?,
        };
        outcome = outcome.merge(result);
    }

    let marker = MarkerFile::new(marker_path, outcome.modified);
    let change = marker.apply()?;
    log.debug(&format!("marker {}: {change:?}", marker.description()));
    Ok(outcome)
}

/// Touch a resource manifest if any embedded file is newer than it.
///
/// # Errors
///
/// Returns an error if the manifest or any embedded file is missing.
pub fn handle_qrc(manifest: &Path, log: &Logger) -> Result<Outcome> {
    let deps = qrc::manifest_dependencies(manifest)?;
    stamp_input(manifest, &deps, log)
}

/// Touch a stylesheet if anything in its import closure is newer than it.
///
/// # Errors
///
/// Returns an error if the stylesheet or an import is missing, or if the
/// imports form a cycle.  Nothing is touched in that case.
pub fn handle_style(stylesheet: &Path, include_dirs: &[PathBuf], log: &Logger) -> Result<Outcome> {
    let closure = style::style_dependencies(stylesheet, include_dirs)?;
    // The closure holds the canonical root first.
    let root = closure.get(0).unwrap_or(stylesheet);
    stamp_input(root, &closure, log)
}

fn stamp_input(input: &Path, deps: &DependencySet, log: &Logger) -> Result<Outcome> {
    let stamp = DependentFile::new(input, deps);
    log.debug(&format!(
        "{}: {} dependencies",
        stamp.description(),
        stamp.dependency_count()
    ));
    let change = stamp.apply()?;
    if change.is_change() {
        log.info(&format!("touched {}", stamp.description()));
    }
    log.record_input(&stamp.description(), change);
    Ok(Outcome {
        modified: change.is_change(),
    })
}
