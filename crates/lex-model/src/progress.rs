//! Progress reporting hooks for long-running pipeline stages.
//!
//! Stages receive a `&dyn ProgressObserver` instead of reporting through a
//! global. Callers that do not care pass [`NoProgress`].

use std::fmt;

/// Pipeline stage that reports progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Flatten,
    Reconcile,
    Write,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Flatten => "Extracting data",
            Stage::Reconcile => "Retrieving missing words",
            Stage::Write => "Saving files",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives progress events from a stage.
///
/// All methods default to no-ops so observers only implement what they need.
pub trait ProgressObserver {
    /// A stage begins processing `total` items.
    fn start(&self, _stage: Stage, _total: u64) {}

    /// `delta` more items of the stage were processed.
    fn advance(&self, _stage: Stage, _delta: u64) {}

    /// The stage completed.
    fn finish(&self, _stage: Stage) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}
