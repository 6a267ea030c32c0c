//! `qrc_list`: print manifest dependencies without touching anything.
use anyhow::{Context as _, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::deps::qrc;

/// Write the dependencies of every manifest in `inputs` to `out`, one path
/// per line, in discovery order.
///
/// # Errors
///
/// Returns an error if a manifest is missing or unreadable, or if writing
/// to `out` fails.
pub fn run(inputs: &[PathBuf], out: &mut dyn Write) -> Result<()> {
    for manifest in inputs {
        let deps = qrc::manifest_dependencies(manifest)?;
        for path in &deps {
            writeln!(out, "{}", path.display()).context("writing dependency list")?;
        }
    }
    Ok(())
}
