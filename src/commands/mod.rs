//! Per-mode orchestration.
pub mod list;
pub mod touch;

use anyhow::Result;
use std::io::Write;

use crate::config::{FileType, Options};
use crate::logging::Logger;

/// What a run did, aggregated over every input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// At least one input was touched.
    pub modified: bool,
}

impl Outcome {
    /// Fold another per-input result into this one.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            modified: self.modified || other.modified,
        }
    }
}

/// Run the mode selected by `options`.
///
/// `qrc_list` writes dependency paths to `out` and touches nothing; the other
/// modes touch stale inputs and then reconcile the marker file.
///
/// # Errors
///
/// Returns the first error encountered; remaining inputs are not processed.
pub fn run(options: &Options, log: &Logger, out: &mut dyn Write) -> Result<Outcome> {
    log.debug(&format!(
        "{} mode, {} input(s), {} include dir(s)",
        options.file_type,
        options.inputs.len(),
        options.include_dirs.len()
    ));
    match options.file_type {
        FileType::QrcList => {
            list::run(&options.inputs, out)?;
            Ok(Outcome::default())
        }
        FileType::Qrc | FileType::Style => {
            let outcome = touch::run(options, log)?;
            log.print_summary();
            Ok(outcome)
        }
    }
}
