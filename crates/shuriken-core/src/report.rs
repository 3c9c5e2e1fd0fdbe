//! Run reports returned by the task runners.

use std::time::Duration;

/// Outcome of a runner that launches one task per target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Name of the runner instance.
    pub runner: String,
    /// Number of tasks launched.
    pub launched: usize,
    /// Number of tasks that had finished when the driver resumed.
    ///
    /// Only join-based runners guarantee this equals `launched`. Fixed-delay
    /// runners report whatever happened to finish in time.
    pub completed: usize,
    /// Wall-clock time from start until the driver resumed.
    pub elapsed: Duration,
}

impl RunReport {
    /// Returns true if every launched task finished before the driver resumed.
    pub fn is_complete(&self) -> bool {
        self.completed == self.launched
    }
}
