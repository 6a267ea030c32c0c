//! Logger facade with per-input result collection.
use std::sync::Mutex;
use std::time::Instant;

use crate::stamp::StampChange;

/// Outcome of one processed input, kept for the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEntry {
    /// Input path as displayed.
    pub name: String,
    /// What happened to the input.
    pub change: StampChange,
}

/// Structured logger that forwards to [`tracing`] and remembers what happened
/// to every input so a summary can be logged at the end of the run.
#[derive(Debug)]
pub struct Logger {
    inputs: Mutex<Vec<InputEntry>>,
    start: Instant,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a new logger; the run clock starts now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inputs: Mutex::new(Vec::new()),
            start: Instant::now(),
        }
    }
}

#[allow(clippy::unused_self)]
impl Logger {
    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "update_dependent::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}

impl Logger {
    /// Record what happened to an input.
    pub fn record_input(&self, name: &str, change: StampChange) {
        if let Ok(mut guard) = self.inputs.lock() {
            guard.push(InputEntry {
                name: name.to_string(),
                change,
            });
        }
    }

    /// A copy of every recorded input, in processing order.
    #[must_use]
    pub fn inputs(&self) -> Vec<InputEntry> {
        self.inputs.lock().map_or_else(|_| Vec::new(), |g| g.clone())
    }

    /// Number of recorded inputs that were touched.
    #[must_use]
    pub fn touched_count(&self) -> usize {
        self.inputs.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|e| e.change == StampChange::Touched)
                .count()
        })
    }

    /// Log the run summary at info level.
    pub fn print_summary(&self) {
        let total = self.inputs.lock().map_or(0, |g| g.len());
        if total == 0 {
            return;
        }
        self.stage("Summary");
        self.info(&format!(
            "{total} inputs checked, {} touched in {} ms",
            self.touched_count(),
            self.start.elapsed().as_millis()
        ));
    }
}
