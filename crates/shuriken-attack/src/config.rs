//! Configuration for attackers and task runners.

use crate::events::{AttackEvent, RunEvent};
use shuriken_core::events::{EventListener, EventListeners, FnListener};
use shuriken_core::{RunReport, Target};
use std::marker::PhantomData;
use std::time::Duration;

/// Configuration for an [`Attacker`](crate::Attacker).
#[derive(Clone)]
pub struct AttackerConfig {
    /// Simulated latency of one attack.
    pub(crate) latency: Duration,
    /// Name of this attacker instance.
    pub(crate) name: String,
    /// Event listeners.
    pub(crate) event_listeners: EventListeners<AttackEvent>,
}

/// Builder for attacker configuration.
pub struct AttackerConfigBuilder {
    latency: Duration,
    name: String,
    event_listeners: EventListeners<AttackEvent>,
}

impl AttackerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            latency: Duration::from_secs(1),
            name: "attacker".to_string(),
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets how long one attack takes.
    ///
    /// Default: 1 second
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the name of this attacker instance.
    ///
    /// Default: "attacker"
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Registers a callback invoked when an attack starts.
    ///
    /// This is the attacker's observable side effect: the CLI turns it into
    /// the "Throwing ninja stars at ..." line.
    ///
    /// # Example
    /// ```rust
    /// use shuriken_attack::Attacker;
    ///
    /// let attacker = Attacker::builder()
    ///     .on_attack_started(|target| println!("Throwing ninja stars at {}", target))
    ///     .build();
    /// ```
    pub fn on_attack_started<F>(mut self, f: F) -> Self
    where
        F: Fn(&Target) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let AttackEvent::Started { target, .. } = event {
                f(target);
            }
        }));
        self
    }

    /// Registers a callback invoked when an attack finishes, with its duration.
    pub fn on_attack_finished<F>(mut self, f: F) -> Self
    where
        F: Fn(&Target, Duration) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let AttackEvent::Finished {
                target, duration, ..
            } = event
            {
                f(target, *duration);
            }
        }));
        self
    }

    /// Registers a raw listener receiving every attack event.
    pub fn listener<L>(mut self, listener: L) -> Self
    where
        L: EventListener<AttackEvent> + 'static,
    {
        self.event_listeners.add(listener);
        self
    }

    /// Builds the attacker.
    pub fn build(self) -> crate::Attacker {
        crate::Attacker::new(AttackerConfig {
            latency: self.latency,
            name: self.name,
            event_listeners: self.event_listeners,
        })
    }
}

impl Default for AttackerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// How the fire-and-forget driver decides that its tasks are finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitStrategy {
    /// Block on a [`JoinCounter`](shuriken_core::JoinCounter) until every
    /// launched task has finished.
    #[default]
    Join,
    /// Sleep for a fixed delay and hope the tasks are done by then.
    ///
    /// Known-bad: the delay provides no ordering guarantee. Tasks slower than
    /// the delay are still running when the driver resumes, and the report's
    /// `completed` count shows it.
    FixedDelay(Duration),
}

/// Configuration shared by the task runners.
#[derive(Clone)]
pub struct RunnerConfig {
    /// Name of this runner instance.
    pub(crate) name: String,
    /// Completion strategy, used by the fire-and-forget runner.
    pub(crate) wait_strategy: WaitStrategy,
    /// Event listeners.
    pub(crate) event_listeners: EventListeners<RunEvent>,
}

/// Builder for a task runner of type `R`.
pub struct RunnerBuilder<R> {
    name: String,
    wait_strategy: WaitStrategy,
    event_listeners: EventListeners<RunEvent>,
    _runner: PhantomData<fn() -> R>,
}

impl<R: From<RunnerConfig>> RunnerBuilder<R> {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            wait_strategy: WaitStrategy::default(),
            event_listeners: EventListeners::new(),
            _runner: PhantomData,
        }
    }

    /// Sets the name of this runner instance.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Registers a callback invoked when work for a target is started.
    pub fn on_task_launched<F>(mut self, f: F) -> Self
    where
        F: Fn(&Target) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let RunEvent::TaskLaunched { target, .. } = event {
                f(target);
            }
        }));
        self
    }

    /// Registers a callback invoked when work for a target completes.
    pub fn on_task_completed<F>(mut self, f: F) -> Self
    where
        F: Fn(&Target) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let RunEvent::TaskCompleted { target, .. } = event {
                f(target);
            }
        }));
        self
    }

    /// Registers a callback invoked when work for a target fails.
    pub fn on_task_failed<F>(mut self, f: F) -> Self
    where
        F: Fn(&Target, &str) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let RunEvent::TaskFailed { target, error, .. } = event {
                f(target, error);
            }
        }));
        self
    }

    /// Registers a callback invoked once the driver resumes.
    ///
    /// # Example
    /// ```rust
    /// use shuriken_attack::SequentialRunner;
    ///
    /// let runner = SequentialRunner::builder()
    ///     .on_run_finished(|report| {
    ///         println!("Attack without concurrency took {:?}", report.elapsed);
    ///     })
    ///     .build();
    /// ```
    pub fn on_run_finished<F>(mut self, f: F) -> Self
    where
        F: Fn(&RunReport) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let RunEvent::RunFinished { report, .. } = event {
                f(report);
            }
        }));
        self
    }

    /// Registers a raw listener receiving every run event.
    pub fn listener<L>(mut self, listener: L) -> Self
    where
        L: EventListener<RunEvent> + 'static,
    {
        self.event_listeners.add(listener);
        self
    }

    /// Builds the runner.
    pub fn build(self) -> R {
        R::from(RunnerConfig {
            name: self.name,
            wait_strategy: self.wait_strategy,
            event_listeners: self.event_listeners,
        })
    }
}

impl RunnerBuilder<crate::FireAndForgetRunner> {
    /// Sets how the driver waits for its detached tasks.
    ///
    /// Default: [`WaitStrategy::Join`]
    pub fn wait_strategy(mut self, strategy: WaitStrategy) -> Self {
        self.wait_strategy = strategy;
        self
    }

    /// Shorthand for `wait_strategy(WaitStrategy::FixedDelay(delay))`.
    pub fn fixed_delay(self, delay: Duration) -> Self {
        self.wait_strategy(WaitStrategy::FixedDelay(delay))
    }
}
