//! Mutex counter: many tasks increment one shared value, then the driver reads it.

use crate::config::{CounterMode, MutexCounterConfig, MutexCounterConfigBuilder};
use crate::events::CounterEvent;
use shuriken_core::{JoinCounter, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[cfg(feature = "metrics")]
use metrics::{counter, histogram};

/// Outcome of a counter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterReport {
    /// Number of increment tasks launched.
    pub tasks: usize,
    /// Counter value the driver read.
    pub observed: u64,
    /// Mode the run used.
    pub mode: CounterMode,
    /// Time until the driver read the value.
    pub elapsed: Duration,
}

impl CounterReport {
    /// Returns true when no increment is missing from `observed`.
    pub fn is_exact(&self) -> bool {
        self.observed == self.tasks as u64
    }

    /// Number of increments not reflected in `observed`.
    pub fn missing(&self) -> u64 {
        (self.tasks as u64).saturating_sub(self.observed)
    }
}

/// State shared by the tasks of one run.
struct Tally {
    /// The counter proper. Locked modes only touch it while holding the lock.
    value: Mutex<u64>,
    /// Last value written. The fixed-delay driver reads this instead of
    /// queueing for the lock behind unfinished tasks. Unlocked mode uses it
    /// as plain unsynchronised storage.
    committed: AtomicU64,
}

/// Launches many concurrent increments against one counter and reports the
/// value the driver observes.
///
/// The counter and its lock live only for the duration of one [`run`](Self::run)
/// call; two runs never share state.
#[derive(Clone)]
pub struct MutexCounter {
    config: Arc<MutexCounterConfig>,
}

impl MutexCounter {
    pub(crate) fn new(config: MutexCounterConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> MutexCounterConfigBuilder {
        MutexCounterConfigBuilder::new()
    }

    /// Returns the configured mode.
    pub fn mode(&self) -> CounterMode {
        self.config.mode
    }

    /// Launches the configured number of tasks, waits according to the mode
    /// and reads the counter.
    pub async fn run(&self) -> Result<CounterReport> {
        let config = &self.config;
        let start = tokio::time::Instant::now();
        let tally = Arc::new(Tally {
            value: Mutex::new(0),
            committed: AtomicU64::new(0),
        });
        let outstanding = JoinCounter::new(config.tasks);

        #[cfg(feature = "tracing")]
        tracing::debug!(runner = %config.name, tasks = config.tasks, mode = ?config.mode, "Launching increments");

        for _ in 0..config.tasks {
            let config = Arc::clone(config);
            let tally = Arc::clone(&tally);
            let done = outstanding.guard();

            tokio::spawn(async move {
                let _done = done;
                let written = if config.mode.is_locked() {
                    increment_locked(&tally, config.hold).await
                } else {
                    increment_unlocked(&tally, config.hold).await
                };

                config.event_listeners.emit(&CounterEvent::Incremented {
                    runner_name: config.name.clone(),
                    timestamp: Instant::now(),
                    value: written,
                });

                #[cfg(feature = "metrics")]
                counter!("shuriken_counter_increments_total", "runner" => config.name.clone())
                    .increment(1);
            });
        }

        let observed = match config.mode {
            CounterMode::Joined => {
                outstanding.wait().await;
                *tally.value.lock().await
            }
            CounterMode::FixedDelay(delay) => {
                tokio::time::sleep(delay).await;
                tally.committed.load(Ordering::Acquire)
            }
            CounterMode::Unlocked => {
                outstanding.wait().await;
                tally.committed.load(Ordering::Acquire)
            }
        };

        let report = CounterReport {
            tasks: config.tasks,
            observed,
            mode: config.mode,
            elapsed: start.elapsed(),
        };

        #[cfg(feature = "tracing")]
        if !report.is_exact() {
            tracing::warn!(
                runner = %config.name,
                tasks = report.tasks,
                observed = report.observed,
                "Counter read below the number of increments"
            );
        }

        #[cfg(feature = "metrics")]
        histogram!("shuriken_run_duration_seconds", "runner" => config.name.clone())
            .record(report.elapsed.as_secs_f64());

        config.event_listeners.emit(&CounterEvent::Finished {
            runner_name: config.name.clone(),
            timestamp: Instant::now(),
            report: report.clone(),
        });

        Ok(report)
    }
}

async fn increment_locked(tally: &Tally, hold: Duration) -> u64 {
    let mut value = tally.value.lock().await;
    if !hold.is_zero() {
        tokio::time::sleep(hold).await;
    }
    *value += 1;
    tally.committed.store(*value, Ordering::Release);
    *value
}

// Read, suspend, write back. Any task scheduled between the read and the
// write has its update overwritten.
async fn increment_unlocked(tally: &Tally, hold: Duration) -> u64 {
    let current = tally.committed.load(Ordering::Acquire);
    tokio::task::yield_now().await;
    if !hold.is_zero() {
        tokio::time::sleep(hold).await;
    }
    let written = current + 1;
    tally.committed.store(written, Ordering::Release);
    written
}
