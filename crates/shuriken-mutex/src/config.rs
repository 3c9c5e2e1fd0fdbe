//! Configuration for the mutex counter.

use crate::events::CounterEvent;
use crate::CounterReport;
use shuriken_core::events::{EventListener, EventListeners, FnListener};
use std::time::Duration;

/// How the increments are synchronised and how the driver waits for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterMode {
    /// Lock around each increment; the driver joins every task.
    #[default]
    Joined,
    /// Lock around each increment; the driver sleeps for a fixed delay and
    /// reads whatever has been committed by then.
    ///
    /// Known-bad: when the tasks need longer than the delay the reported
    /// value is below the task count. Nothing signals that this happened.
    FixedDelay(Duration),
    /// No lock: each task reads, yields, then writes back. Concurrent
    /// read-modify-write sequences overwrite each other and updates are lost.
    /// The driver still joins every task, so any shortfall is the race alone.
    Unlocked,
}

impl CounterMode {
    /// Returns true when increments are serialised by the lock.
    pub fn is_locked(&self) -> bool {
        !matches!(self, CounterMode::Unlocked)
    }
}

/// Configuration for the mutex counter.
#[derive(Clone)]
pub struct MutexCounterConfig {
    pub(crate) name: String,
    pub(crate) tasks: usize,
    pub(crate) mode: CounterMode,
    pub(crate) hold: Duration,
    pub(crate) event_listeners: EventListeners<CounterEvent>,
}

/// Builder for [`MutexCounter`](crate::MutexCounter).
pub struct MutexCounterConfigBuilder {
    name: String,
    tasks: usize,
    mode: CounterMode,
    hold: Duration,
    event_listeners: EventListeners<CounterEvent>,
}

impl MutexCounterConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            name: "mutex-counter".to_string(),
            tasks: 1000,
            mode: CounterMode::default(),
            hold: Duration::ZERO,
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets the name of this counter instance.
    ///
    /// Default: "mutex-counter"
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets how many concurrent increment tasks are launched.
    ///
    /// Default: 1000
    pub fn tasks(mut self, tasks: usize) -> Self {
        self.tasks = tasks;
        self
    }

    /// Sets the synchronisation mode.
    ///
    /// Default: [`CounterMode::Joined`]
    pub fn mode(mut self, mode: CounterMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(CounterMode::FixedDelay(delay))`.
    pub fn fixed_delay(self, delay: Duration) -> Self {
        self.mode(CounterMode::FixedDelay(delay))
    }

    /// Shorthand for `mode(CounterMode::Unlocked)`.
    pub fn unlocked(self) -> Self {
        self.mode(CounterMode::Unlocked)
    }

    /// Sets how long each task stays inside its critical section.
    ///
    /// Default: zero
    pub fn hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    /// Registers a callback invoked with the value each task wrote.
    pub fn on_increment<F>(mut self, f: F) -> Self
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let CounterEvent::Incremented { value, .. } = event {
                f(*value);
            }
        }));
        self
    }

    /// Registers a callback invoked once the driver has read the result.
    ///
    /// # Example
    /// ```rust
    /// use shuriken_mutex::MutexCounter;
    ///
    /// let counter = MutexCounter::builder()
    ///     .on_finished(|report| println!("Result Count is: {}", report.observed))
    ///     .build();
    /// ```
    pub fn on_finished<F>(mut self, f: F) -> Self
    where
        F: Fn(&CounterReport) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let CounterEvent::Finished { report, .. } = event {
                f(report);
            }
        }));
        self
    }

    /// Registers a raw listener receiving every event.
    pub fn listener<L>(mut self, listener: L) -> Self
    where
        L: EventListener<CounterEvent> + 'static,
    {
        self.event_listeners.add(listener);
        self
    }

    /// Builds the counter.
    pub fn build(self) -> crate::MutexCounter {
        crate::MutexCounter::new(MutexCounterConfig {
            name: self.name,
            tasks: self.tasks,
            mode: self.mode,
            hold: self.hold,
            event_listeners: self.event_listeners,
        })
    }
}

impl Default for MutexCounterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
