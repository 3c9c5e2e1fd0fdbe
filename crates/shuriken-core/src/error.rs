//! Error types shared by all runners.
//!
//! None of the demonstrations fail in normal operation. The variants here
//! cover the ways a run can still go wrong: the unit of work itself fails,
//! a spawned task dies, or a channel operation can never complete.

use std::time::Duration;

/// Boxed error produced by a unit of work.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while running a demonstration.
#[derive(Debug, thiserror::Error)]
pub enum ShurikenError {
    /// The unit of work returned an error.
    #[error("work failed in {runner}: {source}")]
    Work {
        /// Runner that executed the work.
        runner: String,
        /// Underlying error.
        #[source]
        source: BoxError,
    },

    /// A spawned task panicked or was cancelled before completing.
    #[error("task in {runner} did not run to completion: {reason}")]
    TaskPanicked {
        /// Runner that spawned the task.
        runner: String,
        /// Description from the runtime.
        reason: String,
    },

    /// The signalling side of a channel went away without sending.
    #[error("completion signal lost in {runner}: sender dropped before signalling")]
    SignalLost {
        /// Runner waiting on the signal.
        runner: String,
    },

    /// A send could not complete because the buffer was full and nothing was
    /// receiving. Without the bounded probe this send would block forever.
    #[error("send blocked for {waited:?} on a full channel (capacity {capacity}); no receiver is draining it")]
    Blocked {
        /// Channel capacity.
        capacity: usize,
        /// How long the send was allowed to wait.
        waited: Duration,
    },

    /// A send was attempted after the receiving side closed.
    #[error("channel closed in {runner}")]
    ChannelClosed {
        /// Runner owning the channel.
        runner: String,
    },
}

impl ShurikenError {
    /// Wraps a work error with the runner name.
    pub fn work(runner: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ShurikenError::Work {
            runner: runner.into(),
            source: source.into(),
        }
    }

    /// Converts a task join failure.
    pub fn task(runner: impl Into<String>, err: tokio::task::JoinError) -> Self {
        let reason = if err.is_panic() {
            "task panicked".to_string()
        } else {
            "task was cancelled".to_string()
        };
        ShurikenError::TaskPanicked {
            runner: runner.into(),
            reason,
        }
    }

    /// Returns true if this is the deadlock hazard surfaced by a bounded send.
    pub fn is_blocked(&self) -> bool {
        matches!(self, ShurikenError::Blocked { .. })
    }
}

/// Result type for shuriken operations.
pub type Result<T> = std::result::Result<T, ShurikenError>;
