//! Buffered channel demo: sends succeed without a receiver only while the
//! buffer has room.

use crate::config::{BufferedConfig, BufferedConfigBuilder};
use crate::events::ChannelEvent;
use shuriken_core::{Result, ShurikenError};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

#[cfg(feature = "metrics")]
use metrics::counter;

/// Outcome of a buffered channel run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedReport {
    /// Messages stored in the buffer, in send order.
    pub sent: Vec<String>,
    /// Messages drained afterwards, in receive order.
    pub received: Vec<String>,
}

/// Demonstrates a bounded channel with nobody receiving during the sends.
///
/// All messages are sent from the driver before anything is received. While
/// the buffer has room each send completes immediately. Once it is full the
/// next send would wait forever, because the only receiver is the driver
/// itself, which is busy sending. Instead of hanging, the demo bounds that
/// send by the configured window and returns [`ShurikenError::Blocked`]. The
/// overflowing message is never dropped or delivered.
///
/// # Example
///
/// ```rust
/// use shuriken_channel::BufferedChannel;
///
/// # async fn example() {
/// let demo = BufferedChannel::builder().capacity(1).build();
///
/// let report = demo.run(["First message"]).await.unwrap();
/// assert_eq!(report.received, vec!["First message"]);
///
/// let err = demo.run(["First message", "Second message"]).await.unwrap_err();
/// assert!(err.is_blocked());
/// # }
/// ```
#[derive(Clone)]
pub struct BufferedChannel {
    config: Arc<BufferedConfig>,
}

impl BufferedChannel {
    pub(crate) fn new(config: BufferedConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> BufferedConfigBuilder {
        BufferedConfigBuilder::new()
    }

    /// Returns the channel capacity.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Sends every message into a fresh channel, then drains it.
    ///
    /// Fails with [`ShurikenError::Blocked`] at the first send that finds the
    /// buffer full.
    pub async fn run<I, M>(&self, messages: I) -> Result<BufferedReport>
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let config = &self.config;
        let (tx, mut rx) = mpsc::channel::<String>(config.capacity);
        let mut sent = Vec::new();

        for message in messages {
            let message = message.into();
            match tokio::time::timeout(config.send_window, tx.send(message.clone())).await {
                Ok(Ok(())) => {
                    config.event_listeners.emit(&ChannelEvent::MessageSent {
                        runner_name: config.name.clone(),
                        timestamp: Instant::now(),
                        message: message.clone(),
                    });

                    #[cfg(feature = "metrics")]
                    counter!("shuriken_channel_values_total", "runner" => config.name.clone())
                        .increment(1);

                    sent.push(message);
                }
                Ok(Err(_)) => {
                    return Err(ShurikenError::ChannelClosed {
                        runner: config.name.clone(),
                    });
                }
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        runner = %config.name,
                        capacity = config.capacity,
                        "Send on a full channel with no receiver would block forever"
                    );

                    config.event_listeners.emit(&ChannelEvent::SendBlocked {
                        runner_name: config.name.clone(),
                        timestamp: Instant::now(),
                        capacity: config.capacity,
                        waited: config.send_window,
                    });
                    return Err(ShurikenError::Blocked {
                        capacity: config.capacity,
                        waited: config.send_window,
                    });
                }
            }
        }

        drop(tx);

        let mut received = Vec::with_capacity(sent.len());
        while let Some(message) = rx.recv().await {
            config.event_listeners.emit(&ChannelEvent::MessageReceived {
                runner_name: config.name.clone(),
                timestamp: Instant::now(),
                message: message.clone(),
            });
            received.push(message);
        }

        Ok(BufferedReport { sent, received })
    }

    /// Fills the buffer to capacity and then attempts one more send.
    ///
    /// Always returns [`ShurikenError::Blocked`]: the extra send has nowhere
    /// to go. This is the "uncomment the second send" experiment, made safe.
    pub async fn probe_overflow(&self) -> Result<BufferedReport> {
        let last = self.config.capacity.saturating_add(1);
        let messages = (1..=last).map(|n| format!("Message {n}"));
        self.run(messages).await
    }
}
