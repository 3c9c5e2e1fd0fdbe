//! Join-counted runner.
//!
//! Launches one task per target. A [`JoinCounter`] starts at the number of
//! targets; each task attacks its target and decrements the counter, and the
//! driver blocks until the counter reaches zero. The driver therefore never
//! resumes before every task has reported. The tasks themselves finish in no
//! particular order.
//!
//! # Example
//!
//! ```rust,no_run
//! use shuriken_join::JoinCountedRunner;
//! use shuriken_core::default_targets;
//!
//! # async fn example() -> shuriken_core::Result<()> {
//! let report = JoinCountedRunner::builder()
//!     .on_target_attacked(|target| println!("Attacked evil ninja: {}", target))
//!     .on_mission_completed(|_| println!("Mission Completed!"))
//!     .build()
//!     .run(default_targets())
//!     .await?;
//! assert!(report.is_complete());
//! # Ok(())
//! # }
//! ```

mod config;
mod events;

pub use config::{JoinConfig, JoinConfigBuilder};
pub use events::JoinEvent;

use shuriken_core::{JoinCounter, Result, RunReport, Target};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "metrics")]
use metrics::{counter, histogram};

/// Barrier-synchronised runner. See the [crate docs](crate).
#[derive(Clone)]
pub struct JoinCountedRunner {
    config: Arc<JoinConfig>,
}

impl JoinCountedRunner {
    pub(crate) fn new(config: JoinConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> JoinConfigBuilder {
        JoinConfigBuilder::new()
    }

    /// Attacks every target on its own task and waits for all of them.
    pub async fn run<I>(&self, targets: I) -> Result<RunReport>
    where
        I: IntoIterator<Item = Target>,
    {
        let start = tokio::time::Instant::now();
        let targets: Vec<Target> = targets.into_iter().collect();
        let launched = targets.len();

        let counter = JoinCounter::new(launched);
        let sequence = Arc::new(AtomicUsize::new(0));
        let completed = Arc::new(AtomicUsize::new(0));

        for target in targets {
            let config = Arc::clone(&self.config);
            let sequence = Arc::clone(&sequence);
            let completed = Arc::clone(&completed);
            let done = counter.guard();

            #[cfg(feature = "metrics")]
            counter!("shuriken_tasks_launched_total", "runner" => config.name.clone())
                .increment(1);

            tokio::spawn(async move {
                let _done = done;
                if !config.work_latency.is_zero() {
                    tokio::time::sleep(config.work_latency).await;
                }

                config.event_listeners.emit(&JoinEvent::TargetAttacked {
                    runner_name: config.name.clone(),
                    timestamp: Instant::now(),
                    target,
                    sequence: sequence.fetch_add(1, Ordering::SeqCst),
                });
                completed.fetch_add(1, Ordering::SeqCst);

                #[cfg(feature = "metrics")]
                counter!("shuriken_tasks_completed_total", "runner" => config.name.clone())
                    .increment(1);
            });
        }

        counter.wait().await;

        let report = RunReport {
            runner: self.config.name.clone(),
            launched,
            completed: completed.load(Ordering::SeqCst),
            elapsed: start.elapsed(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(runner = %self.config.name, launched, "All tasks joined");

        #[cfg(feature = "metrics")]
        histogram!("shuriken_run_duration_seconds", "runner" => self.config.name.clone())
            .record(report.elapsed.as_secs_f64());

        self.config.event_listeners.emit(&JoinEvent::MissionCompleted {
            runner_name: self.config.name.clone(),
            timestamp: Instant::now(),
            sequence: sequence.fetch_add(1, Ordering::SeqCst),
            report: report.clone(),
        });

        Ok(report)
    }
}
