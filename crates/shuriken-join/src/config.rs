//! Configuration for the join-counted runner.

use crate::events::JoinEvent;
use shuriken_core::events::{EventListener, EventListeners, FnListener};
use shuriken_core::{RunReport, Target};
use std::time::Duration;

/// Configuration for the join-counted runner.
#[derive(Clone)]
pub struct JoinConfig {
    /// Name of this runner instance.
    pub(crate) name: String,
    /// Simulated work each task performs before reporting.
    pub(crate) work_latency: Duration,
    /// Event listeners.
    pub(crate) event_listeners: EventListeners<JoinEvent>,
}

/// Builder for the join-counted runner.
pub struct JoinConfigBuilder {
    name: String,
    work_latency: Duration,
    event_listeners: EventListeners<JoinEvent>,
}

impl JoinConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            name: "join-counted".to_string(),
            work_latency: Duration::ZERO,
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets the name of this runner instance.
    ///
    /// Default: "join-counted"
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets how long each task works before reporting its attack.
    ///
    /// Default: zero
    pub fn work_latency(mut self, latency: Duration) -> Self {
        self.work_latency = latency;
        self
    }

    /// Registers a callback invoked by each task after its attack.
    ///
    /// # Example
    /// ```rust
    /// use shuriken_join::JoinCountedRunner;
    ///
    /// let runner = JoinCountedRunner::builder()
    ///     .on_target_attacked(|target| println!("Attacked evil ninja: {}", target))
    ///     .on_mission_completed(|_| println!("Mission Completed!"))
    ///     .build();
    /// ```
    pub fn on_target_attacked<F>(mut self, f: F) -> Self
    where
        F: Fn(&Target) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let JoinEvent::TargetAttacked { target, .. } = event {
                f(target);
            }
        }));
        self
    }

    /// Registers a callback invoked once the driver resumes.
    pub fn on_mission_completed<F>(mut self, f: F) -> Self
    where
        F: Fn(&RunReport) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let JoinEvent::MissionCompleted { report, .. } = event {
                f(report);
            }
        }));
        self
    }

    /// Registers a raw listener receiving every event.
    pub fn listener<L>(mut self, listener: L) -> Self
    where
        L: EventListener<JoinEvent> + 'static,
    {
        self.event_listeners.add(listener);
        self
    }

    /// Builds the runner.
    pub fn build(self) -> crate::JoinCountedRunner {
        crate::JoinCountedRunner::new(JoinConfig {
            name: self.name,
            work_latency: self.work_latency,
            event_listeners: self.event_listeners,
        })
    }
}

impl Default for JoinConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
