//! Fire-and-forget runner: one detached task per target.

use crate::config::{RunnerBuilder, RunnerConfig, WaitStrategy};
use crate::events::RunEvent;
use shuriken_core::{BoxError, JoinCounter, Result, RunReport, Target};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tower::{Service, ServiceExt};

#[cfg(feature = "metrics")]
use metrics::{counter, histogram};

/// Spawns one task per target and never awaits the task handles.
///
/// How the driver learns that the tasks are done depends on the
/// [`WaitStrategy`]:
///
/// - [`WaitStrategy::Join`] (default) blocks on a [`JoinCounter`] that every
///   task decrements when it finishes, so the driver never resumes early.
/// - [`WaitStrategy::FixedDelay`] reproduces the classic mistake of sleeping
///   "long enough". It gives no ordering guarantee: with enough tasks, slow
///   work, or a busy scheduler the driver resumes while tasks are still
///   running. The returned [`RunReport::completed`] shows how many had
///   actually finished.
///
/// Task failures are reported through events and leave `completed` short of
/// `launched`; they do not fail the run, since nothing awaits the tasks.
#[derive(Clone)]
pub struct FireAndForgetRunner {
    config: Arc<RunnerConfig>,
}

impl FireAndForgetRunner {
    /// Creates a new builder. Default name: "fire-and-forget".
    pub fn builder() -> RunnerBuilder<FireAndForgetRunner> {
        RunnerBuilder::new("fire-and-forget")
    }

    /// Returns the runner name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the configured wait strategy.
    pub fn wait_strategy(&self) -> WaitStrategy {
        self.config.wait_strategy
    }

    /// Launches `service` once per target on detached tasks, then waits
    /// according to the configured strategy.
    pub async fn run<S, I>(&self, service: S, targets: I) -> Result<RunReport>
    where
        S: Service<Target, Response = ()> + Clone + Send + 'static,
        S::Future: Send + 'static,
        S::Error: Into<BoxError> + Send + 'static,
        I: IntoIterator<Item = Target>,
    {
        let start = tokio::time::Instant::now();
        let completed = Arc::new(AtomicUsize::new(0));
        let outstanding = JoinCounter::new(0);
        let mut launched = 0;

        for target in targets {
            launched += 1;
            outstanding.add(1);

            let config = Arc::clone(&self.config);
            let completed = Arc::clone(&completed);
            let guard = outstanding.guard();
            let svc = service.clone();

            config.event_listeners.emit(&RunEvent::TaskLaunched {
                runner_name: config.name.clone(),
                timestamp: Instant::now(),
                target: target.clone(),
            });

            #[cfg(feature = "metrics")]
            counter!("shuriken_tasks_launched_total", "runner" => config.name.clone())
                .increment(1);

            // The handle is dropped on purpose: nobody awaits these tasks.
            tokio::spawn(async move {
                let _guard = guard;
                match svc.oneshot(target.clone()).await {
                    Ok(()) => {
                        completed.fetch_add(1, Ordering::SeqCst);
                        config.event_listeners.emit(&RunEvent::TaskCompleted {
                            runner_name: config.name.clone(),
                            timestamp: Instant::now(),
                            target,
                        });

                        #[cfg(feature = "metrics")]
                        counter!("shuriken_tasks_completed_total", "runner" => config.name.clone())
                            .increment(1);
                    }
                    Err(err) => {
                        let err: BoxError = err.into();

                        #[cfg(feature = "tracing")]
                        tracing::debug!(runner = %config.name, %target, error = %err, "Detached task failed");

                        config.event_listeners.emit(&RunEvent::TaskFailed {
                            runner_name: config.name.clone(),
                            timestamp: Instant::now(),
                            target,
                            error: err.to_string(),
                        });
                    }
                }
            });
        }

        match self.config.wait_strategy {
            WaitStrategy::Join => outstanding.wait().await,
            WaitStrategy::FixedDelay(delay) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(runner = %self.config.name, ?delay, "Sleeping instead of joining");
                tokio::time::sleep(delay).await
            }
        }

        let report = RunReport {
            runner: self.config.name.clone(),
            launched,
            completed: completed.load(Ordering::SeqCst),
            elapsed: start.elapsed(),
        };

        #[cfg(feature = "tracing")]
        if !report.is_complete() {
            tracing::warn!(
                runner = %self.config.name,
                launched = report.launched,
                completed = report.completed,
                "Driver resumed before every task finished"
            );
        }

        #[cfg(feature = "metrics")]
        histogram!("shuriken_run_duration_seconds", "runner" => self.config.name.clone())
            .record(report.elapsed.as_secs_f64());

        self.config.event_listeners.emit(&RunEvent::RunFinished {
            runner_name: self.config.name.clone(),
            timestamp: Instant::now(),
            report: report.clone(),
        });

        Ok(report)
    }
}

impl From<RunnerConfig> for FireAndForgetRunner {
    fn from(config: RunnerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
