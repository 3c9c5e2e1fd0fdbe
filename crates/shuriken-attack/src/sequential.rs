//! Sequential runner: one target after another, no overlap.

use crate::config::{RunnerBuilder, RunnerConfig};
use crate::events::RunEvent;
use shuriken_core::{BoxError, Result, RunReport, ShurikenError, Target};
use std::sync::Arc;
use std::time::Instant;
use tower::{Service, ServiceExt};

#[cfg(feature = "metrics")]
use metrics::{counter, histogram};

/// Runs the work for each target strictly in order.
///
/// Total elapsed time is the sum of the per-target latencies. The first
/// failing target aborts the run.
///
/// # Example
///
/// ```rust,no_run
/// use shuriken_attack::{Attacker, SequentialRunner};
/// use shuriken_core::default_targets;
///
/// # async fn example() -> shuriken_core::Result<()> {
/// let report = SequentialRunner::builder()
///     .build()
///     .run(Attacker::default(), default_targets())
///     .await?;
/// println!("Attack without concurrency took {:?}", report.elapsed);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SequentialRunner {
    config: Arc<RunnerConfig>,
}

impl SequentialRunner {
    /// Creates a new builder. Default name: "sequential".
    pub fn builder() -> RunnerBuilder<SequentialRunner> {
        RunnerBuilder::new("sequential")
    }

    /// Returns the runner name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Runs `service` once per target, in order.
    pub async fn run<S, I>(&self, mut service: S, targets: I) -> Result<RunReport>
    where
        S: Service<Target, Response = ()>,
        S::Error: Into<BoxError>,
        I: IntoIterator<Item = Target>,
    {
        let config = &self.config;
        let start = tokio::time::Instant::now();
        let mut launched = 0;
        let mut completed = 0;

        for target in targets {
            launched += 1;
            config.event_listeners.emit(&RunEvent::TaskLaunched {
                runner_name: config.name.clone(),
                timestamp: Instant::now(),
                target: target.clone(),
            });

            #[cfg(feature = "metrics")]
            counter!("shuriken_tasks_launched_total", "runner" => config.name.clone())
                .increment(1);

            let outcome = match service.ready().await {
                Ok(ready) => ready.call(target.clone()).await,
                Err(err) => Err(err),
            };

            if let Err(err) = outcome {
                let err: BoxError = err.into();
                config.event_listeners.emit(&RunEvent::TaskFailed {
                    runner_name: config.name.clone(),
                    timestamp: Instant::now(),
                    target,
                    error: err.to_string(),
                });
                return Err(ShurikenError::work(config.name.clone(), err));
            }

            completed += 1;
            config.event_listeners.emit(&RunEvent::TaskCompleted {
                runner_name: config.name.clone(),
                timestamp: Instant::now(),
                target,
            });

            #[cfg(feature = "metrics")]
            counter!("shuriken_tasks_completed_total", "runner" => config.name.clone())
                .increment(1);
        }

        let report = RunReport {
            runner: config.name.clone(),
            launched,
            completed,
            elapsed: start.elapsed(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(runner = %config.name, elapsed = ?report.elapsed, "Sequential run finished");

        #[cfg(feature = "metrics")]
        histogram!("shuriken_run_duration_seconds", "runner" => config.name.clone())
            .record(report.elapsed.as_secs_f64());

        config.event_listeners.emit(&RunEvent::RunFinished {
            runner_name: config.name.clone(),
            timestamp: Instant::now(),
            report: report.clone(),
        });

        Ok(report)
    }
}

impl From<RunnerConfig> for SequentialRunner {
    fn from(config: RunnerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
