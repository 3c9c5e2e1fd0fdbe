//! Streaming runner: a producer sends a fixed number of scores and closes the
//! channel; the consumer reads until it observes the closure.

use crate::config::{StreamingConfig, StreamingConfigBuilder};
use crate::events::ChannelEvent;
use rand::Rng;
use shuriken_core::{Result, ShurikenError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[cfg(feature = "metrics")]
use metrics::{counter, histogram};

/// Outcome of a streaming run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamReport {
    /// Scores in the order they were received.
    pub scores: Vec<u32>,
    /// Whether the consumer observed the closed channel.
    pub closed: bool,
    /// Time from start until the consumer observed closure.
    pub elapsed: Duration,
}

/// One producer, one consumer, FIFO order, explicit close.
///
/// The producer task draws `rounds` scores from `0..max_score`, sends each
/// one, then drops its sender, which closes the channel. The consumer loops on
/// `recv`: `Some(score)` is a real value, `None` means closed and drained.
/// The consumer therefore sees exactly the produced values, in order, and
/// then exactly one closure.
#[derive(Clone)]
pub struct StreamingRunner {
    config: Arc<StreamingConfig>,
}

impl StreamingRunner {
    pub(crate) fn new(config: StreamingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> StreamingConfigBuilder {
        StreamingConfigBuilder::new()
    }

    /// Spawns the producer and consumes until the channel closes.
    pub async fn run(&self) -> Result<StreamReport> {
        let start = tokio::time::Instant::now();
        let (tx, mut rx) = mpsc::channel::<u32>(self.config.capacity);

        let producer = {
            let config = Arc::clone(&self.config);
            let mut rng = config.create_rng();
            tokio::spawn(async move {
                for round in 0..config.rounds {
                    let score = rng.random_range(0..config.max_score);
                    if tx.send(score).await.is_err() {
                        // Consumer went away; nothing left to do.
                        break;
                    }
                    config.event_listeners.emit(&ChannelEvent::ScoreProduced {
                        runner_name: config.name.clone(),
                        timestamp: Instant::now(),
                        round,
                        score,
                    });
                }
                // `tx` is dropped here, which closes the channel.
            })
        };

        let config = &self.config;
        let mut scores = Vec::new();
        loop {
            match rx.recv().await {
                Some(score) => {
                    config.event_listeners.emit(&ChannelEvent::ScoreReceived {
                        runner_name: config.name.clone(),
                        timestamp: Instant::now(),
                        round: scores.len(),
                        score,
                    });

                    #[cfg(feature = "metrics")]
                    counter!("shuriken_channel_values_total", "runner" => config.name.clone())
                        .increment(1);

                    scores.push(score);
                }
                None => {
                    config.event_listeners.emit(&ChannelEvent::ChannelClosed {
                        runner_name: config.name.clone(),
                        timestamp: Instant::now(),
                        received: scores.len(),
                    });
                    break;
                }
            }
        }

        producer
            .await
            .map_err(|err| ShurikenError::task(config.name.clone(), err))?;

        let elapsed = start.elapsed();

        #[cfg(feature = "tracing")]
        tracing::debug!(runner = %config.name, received = scores.len(), "Channel closed");

        #[cfg(feature = "metrics")]
        histogram!("shuriken_run_duration_seconds", "runner" => config.name.clone())
            .record(elapsed.as_secs_f64());

        Ok(StreamReport {
            scores,
            closed: true,
            elapsed,
        })
    }
}
