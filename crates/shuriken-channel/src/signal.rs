//! Signal channel runner: a worker reports completion through a one-shot
//! rendezvous channel.

use crate::config::{SignalConfig, SignalConfigBuilder};
use crate::events::ChannelEvent;
use shuriken_core::{BoxError, Result, ShurikenError, Target};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tower::{Service, ServiceExt};

#[cfg(feature = "metrics")]
use metrics::{counter, histogram};

/// Outcome of a signal channel run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalReport {
    /// Target the worker attacked.
    pub target: Target,
    /// Value read from the channel: `true` when the work succeeded.
    pub signal: bool,
    /// Time from start until the driver's read returned.
    pub elapsed: Duration,
}

/// Spawns one worker and blocks on its completion signal.
///
/// Exactly one value is sent and exactly one is received, and the send
/// happens-before the receive returns, so the driver can never resume before
/// the work is finished. This is the channel-based fix for the fixed-delay
/// fire-and-forget runner.
///
/// The signal is `false` when the work returned an error. If the worker dies
/// without signalling, the run fails with [`ShurikenError::SignalLost`].
#[derive(Clone)]
pub struct SignalRunner {
    config: Arc<SignalConfig>,
}

impl SignalRunner {
    pub(crate) fn new(config: SignalConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> SignalConfigBuilder {
        SignalConfigBuilder::new()
    }

    /// Runs `service` for `target` on a spawned task and waits for its signal.
    pub async fn run<S>(&self, service: S, target: Target) -> Result<SignalReport>
    where
        S: Service<Target, Response = ()> + Send + 'static,
        S::Future: Send + 'static,
        S::Error: Into<BoxError> + Send + 'static,
    {
        let start = tokio::time::Instant::now();
        let (tx, rx) = oneshot::channel::<bool>();

        let config = Arc::clone(&self.config);
        let worker_target = target.clone();
        tokio::spawn(async move {
            let signal = match service.oneshot(worker_target).await {
                Ok(()) => true,
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    {
                        let err: BoxError = _err.into();
                        tracing::debug!(runner = %config.name, error = %err, "Worker failed, signalling false");
                    }
                    false
                }
            };

            config.event_listeners.emit(&ChannelEvent::SignalSent {
                runner_name: config.name.clone(),
                timestamp: Instant::now(),
                signal,
            });

            // The driver only stops listening if it was itself dropped.
            let _ = tx.send(signal);
        });

        let signal = rx.await.map_err(|_| ShurikenError::SignalLost {
            runner: self.config.name.clone(),
        })?;

        let elapsed = start.elapsed();

        #[cfg(feature = "tracing")]
        tracing::debug!(runner = %self.config.name, signal, ?elapsed, "Signal received");

        #[cfg(feature = "metrics")]
        {
            counter!("shuriken_channel_values_total", "runner" => self.config.name.clone())
                .increment(1);
            histogram!("shuriken_run_duration_seconds", "runner" => self.config.name.clone())
                .record(elapsed.as_secs_f64());
        }

        self.config.event_listeners.emit(&ChannelEvent::SignalReceived {
            runner_name: self.config.name.clone(),
            timestamp: Instant::now(),
            signal,
        });

        Ok(SignalReport {
            target,
            signal,
            elapsed,
        })
    }
}
