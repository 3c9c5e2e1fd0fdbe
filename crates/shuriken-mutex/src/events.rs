use crate::CounterReport;
use shuriken_core::DemoEvent;
use std::time::Instant;

/// Events emitted by the mutex counter.
#[derive(Debug, Clone)]
pub enum CounterEvent {
    /// A task finished its increment.
    Incremented {
        runner_name: String,
        timestamp: Instant,
        /// Counter value written by this task.
        value: u64,
    },
    /// The driver read the final value.
    Finished {
        runner_name: String,
        timestamp: Instant,
        report: CounterReport,
    },
}

impl DemoEvent for CounterEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CounterEvent::Incremented { .. } => "incremented",
            CounterEvent::Finished { .. } => "finished",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            CounterEvent::Incremented { timestamp, .. }
            | CounterEvent::Finished { timestamp, .. } => *timestamp,
        }
    }

    fn runner_name(&self) -> &str {
        match self {
            CounterEvent::Incremented { runner_name, .. }
            | CounterEvent::Finished { runner_name, .. } => runner_name,
        }
    }
}
