//! Event types for the join-counted runner.

use shuriken_core::{DemoEvent, RunReport, Target};
use std::time::Instant;

/// Events emitted by the join-counted runner.
///
/// Every event carries a `sequence` drawn from one counter shared by the
/// tasks and the driver, so listeners can check ordering without relying on
/// clock resolution.
#[derive(Debug, Clone)]
pub enum JoinEvent {
    /// A task attacked its target and is about to decrement the counter.
    TargetAttacked {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Target that was attacked.
        target: Target,
        /// Logical completion order.
        sequence: usize,
    },
    /// The counter reached zero and the driver resumed.
    MissionCompleted {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Logical order of the driver's resumption.
        sequence: usize,
        /// Summary of the run.
        report: RunReport,
    },
}

impl DemoEvent for JoinEvent {
    fn event_type(&self) -> &'static str {
        match self {
            JoinEvent::TargetAttacked { .. } => "target_attacked",
            JoinEvent::MissionCompleted { .. } => "mission_completed",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            JoinEvent::TargetAttacked { timestamp, .. }
            | JoinEvent::MissionCompleted { timestamp, .. } => *timestamp,
        }
    }

    fn runner_name(&self) -> &str {
        match self {
            JoinEvent::TargetAttacked { runner_name, .. }
            | JoinEvent::MissionCompleted { runner_name, .. } => runner_name,
        }
    }
}
