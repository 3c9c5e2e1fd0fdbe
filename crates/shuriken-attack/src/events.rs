//! Event types for attackers and the task runners that drive them.

use shuriken_core::{DemoEvent, RunReport, Target};
use std::time::{Duration, Instant};

/// Events emitted by an [`Attacker`](crate::Attacker).
#[derive(Debug, Clone)]
pub enum AttackEvent {
    /// The attacker started throwing stars at a target.
    Started {
        /// Name of the attacker instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Target under attack.
        target: Target,
    },
    /// The simulated latency elapsed and the attack is over.
    Finished {
        /// Name of the attacker instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Target that was attacked.
        target: Target,
        /// How long the attack took.
        duration: Duration,
    },
}

impl DemoEvent for AttackEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AttackEvent::Started { .. } => "attack_started",
            AttackEvent::Finished { .. } => "attack_finished",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            AttackEvent::Started { timestamp, .. } | AttackEvent::Finished { timestamp, .. } => {
                *timestamp
            }
        }
    }

    fn runner_name(&self) -> &str {
        match self {
            AttackEvent::Started { runner_name, .. }
            | AttackEvent::Finished { runner_name, .. } => runner_name,
        }
    }
}

/// Events emitted by the sequential and fire-and-forget runners.
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// A unit of work was started for a target.
    TaskLaunched {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Target handed to the work.
        target: Target,
    },
    /// A unit of work finished successfully.
    TaskCompleted {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Target handed to the work.
        target: Target,
    },
    /// A unit of work returned an error.
    TaskFailed {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Target handed to the work.
        target: Target,
        /// Rendered error.
        error: String,
    },
    /// The driver resumed and the run is over.
    RunFinished {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Summary of the run.
        report: RunReport,
    },
}

impl DemoEvent for RunEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RunEvent::TaskLaunched { .. } => "task_launched",
            RunEvent::TaskCompleted { .. } => "task_completed",
            RunEvent::TaskFailed { .. } => "task_failed",
            RunEvent::RunFinished { .. } => "run_finished",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            RunEvent::TaskLaunched { timestamp, .. }
            | RunEvent::TaskCompleted { timestamp, .. }
            | RunEvent::TaskFailed { timestamp, .. }
            | RunEvent::RunFinished { timestamp, .. } => *timestamp,
        }
    }

    fn runner_name(&self) -> &str {
        match self {
            RunEvent::TaskLaunched { runner_name, .. }
            | RunEvent::TaskCompleted { runner_name, .. }
            | RunEvent::TaskFailed { runner_name, .. }
            | RunEvent::RunFinished { runner_name, .. } => runner_name,
        }
    }
}
