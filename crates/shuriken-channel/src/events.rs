//! Event types for the channel demonstrations.

use shuriken_core::DemoEvent;
use std::time::{Duration, Instant};

/// Events emitted by the signal, buffered and streaming runners.
#[derive(Debug, Clone)]
pub enum ChannelEvent {
    /// The worker wrote its completion signal.
    SignalSent {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Whether the work succeeded.
        signal: bool,
    },
    /// The driver's blocking read returned the completion signal.
    SignalReceived {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Received value.
        signal: bool,
    },
    /// A message was stored in the buffer without a receiver waiting.
    MessageSent {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Message text.
        message: String,
    },
    /// A send found the buffer full and nobody draining it.
    SendBlocked {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Buffer capacity.
        capacity: usize,
        /// How long the send waited before giving up.
        waited: Duration,
    },
    /// A buffered message was drained.
    MessageReceived {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Message text.
        message: String,
    },
    /// The producer drew a score and sent it.
    ScoreProduced {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Zero-based round.
        round: usize,
        /// Drawn score.
        score: u32,
    },
    /// The consumer received a score.
    ScoreReceived {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Zero-based round.
        round: usize,
        /// Received score.
        score: u32,
    },
    /// The consumer observed the closed channel.
    ChannelClosed {
        /// Name of the runner instance.
        runner_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Number of values received before closure.
        received: usize,
    },
}

impl DemoEvent for ChannelEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ChannelEvent::SignalSent { .. } => "signal_sent",
            ChannelEvent::SignalReceived { .. } => "signal_received",
            ChannelEvent::MessageSent { .. } => "message_sent",
            ChannelEvent::SendBlocked { .. } => "send_blocked",
            ChannelEvent::MessageReceived { .. } => "message_received",
            ChannelEvent::ScoreProduced { .. } => "score_produced",
            ChannelEvent::ScoreReceived { .. } => "score_received",
            ChannelEvent::ChannelClosed { .. } => "channel_closed",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            ChannelEvent::SignalSent { timestamp, .. }
            | ChannelEvent::SignalReceived { timestamp, .. }
            | ChannelEvent::MessageSent { timestamp, .. }
            | ChannelEvent::SendBlocked { timestamp, .. }
            | ChannelEvent::MessageReceived { timestamp, .. }
            | ChannelEvent::ScoreProduced { timestamp, .. }
            | ChannelEvent::ScoreReceived { timestamp, .. }
            | ChannelEvent::ChannelClosed { timestamp, .. } => *timestamp,
        }
    }

    fn runner_name(&self) -> &str {
        match self {
            ChannelEvent::SignalSent { runner_name, .. }
            | ChannelEvent::SignalReceived { runner_name, .. }
            | ChannelEvent::MessageSent { runner_name, .. }
            | ChannelEvent::SendBlocked { runner_name, .. }
            | ChannelEvent::MessageReceived { runner_name, .. }
            | ChannelEvent::ScoreProduced { runner_name, .. }
            | ChannelEvent::ScoreReceived { runner_name, .. }
            | ChannelEvent::ChannelClosed { runner_name, .. } => runner_name,
        }
    }
}
