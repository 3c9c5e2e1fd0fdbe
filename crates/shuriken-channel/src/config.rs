//! Configuration for the channel demonstrations.

use crate::events::ChannelEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shuriken_core::events::{EventListener, EventListeners, FnListener};
use std::time::Duration;

/// Largest channel capacity the builders accept.
///
/// Tokio backs a bounded channel with a semaphore and cannot hold more
/// permits than this. Larger values are lowered to it.
pub const MAX_CAPACITY: usize = tokio::sync::Semaphore::MAX_PERMITS;

/// Configuration for the [`SignalRunner`](crate::SignalRunner).
#[derive(Clone)]
pub struct SignalConfig {
    pub(crate) name: String,
    pub(crate) event_listeners: EventListeners<ChannelEvent>,
}

/// Builder for the signal runner.
pub struct SignalConfigBuilder {
    name: String,
    event_listeners: EventListeners<ChannelEvent>,
}

impl SignalConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            name: "signal-channel".to_string(),
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets the name of this runner instance.
    ///
    /// Default: "signal-channel"
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Registers a callback invoked when the worker writes its signal.
    pub fn on_signal_sent<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let ChannelEvent::SignalSent { signal, .. } = event {
                f(*signal);
            }
        }));
        self
    }

    /// Registers a callback invoked when the driver's read returns.
    pub fn on_signal_received<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let ChannelEvent::SignalReceived { signal, .. } = event {
                f(*signal);
            }
        }));
        self
    }

    /// Registers a raw listener receiving every channel event.
    pub fn listener<L>(mut self, listener: L) -> Self
    where
        L: EventListener<ChannelEvent> + 'static,
    {
        self.event_listeners.add(listener);
        self
    }

    /// Builds the runner.
    pub fn build(self) -> crate::SignalRunner {
        crate::SignalRunner::new(SignalConfig {
            name: self.name,
            event_listeners: self.event_listeners,
        })
    }
}

impl Default for SignalConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the [`BufferedChannel`](crate::BufferedChannel) demo.
#[derive(Clone)]
pub struct BufferedConfig {
    pub(crate) name: String,
    pub(crate) capacity: usize,
    pub(crate) send_window: Duration,
    pub(crate) event_listeners: EventListeners<ChannelEvent>,
}

/// Builder for the buffered channel demo.
pub struct BufferedConfigBuilder {
    name: String,
    capacity: usize,
    send_window: Duration,
    event_listeners: EventListeners<ChannelEvent>,
}

impl BufferedConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            name: "buffered-channel".to_string(),
            capacity: 1,
            send_window: Duration::from_millis(100),
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets the name of this demo instance.
    ///
    /// Default: "buffered-channel"
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the channel capacity, clamped to `1..=`[`MAX_CAPACITY`].
    ///
    /// Default: 1
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.clamp(1, MAX_CAPACITY);
        self
    }

    /// Sets how long a send may wait for buffer space before the demo
    /// reports it as blocked.
    ///
    /// Nothing drains the buffer while sends are in progress, so any send
    /// that waits at all would wait forever. The window only bounds how long
    /// it takes to notice.
    ///
    /// Default: 100 milliseconds
    pub fn send_window(mut self, window: Duration) -> Self {
        self.send_window = window;
        self
    }

    /// Registers a callback invoked when a message is buffered.
    pub fn on_message_sent<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let ChannelEvent::MessageSent { message, .. } = event {
                f(message);
            }
        }));
        self
    }

    /// Registers a callback invoked when a message is drained.
    pub fn on_message_received<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let ChannelEvent::MessageReceived { message, .. } = event {
                f(message);
            }
        }));
        self
    }

    /// Registers a callback invoked when a send finds the buffer full.
    pub fn on_send_blocked<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, Duration) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let ChannelEvent::SendBlocked {
                capacity, waited, ..
            } = event
            {
                f(*capacity, *waited);
            }
        }));
        self
    }

    /// Registers a raw listener receiving every channel event.
    pub fn listener<L>(mut self, listener: L) -> Self
    where
        L: EventListener<ChannelEvent> + 'static,
    {
        self.event_listeners.add(listener);
        self
    }

    /// Builds the demo.
    pub fn build(self) -> crate::BufferedChannel {
        crate::BufferedChannel::new(BufferedConfig {
            name: self.name,
            capacity: self.capacity,
            send_window: self.send_window,
            event_listeners: self.event_listeners,
        })
    }
}

impl Default for BufferedConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the [`StreamingRunner`](crate::StreamingRunner).
#[derive(Clone)]
pub struct StreamingConfig {
    pub(crate) name: String,
    pub(crate) rounds: usize,
    pub(crate) max_score: u32,
    pub(crate) capacity: usize,
    pub(crate) seed: Option<u64>,
    pub(crate) event_listeners: EventListeners<ChannelEvent>,
}

impl StreamingConfig {
    /// Creates the producer's random source.
    pub(crate) fn create_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Builder for the streaming runner.
pub struct StreamingConfigBuilder {
    name: String,
    rounds: usize,
    max_score: u32,
    capacity: usize,
    seed: Option<u64>,
    event_listeners: EventListeners<ChannelEvent>,
}

impl StreamingConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            name: "streaming-channel".to_string(),
            rounds: 3,
            max_score: 10,
            capacity: 1,
            seed: None,
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets the name of this runner instance.
    ///
    /// Default: "streaming-channel"
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets how many values the producer sends before closing the channel.
    ///
    /// Default: 3
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the exclusive upper bound of each score. Values below 1 are
    /// raised to 1.
    ///
    /// Default: 10 (scores in `0..10`)
    pub fn max_score(mut self, max_score: u32) -> Self {
        self.max_score = max_score.max(1);
        self
    }

    /// Sets the channel capacity, clamped to `1..=`[`MAX_CAPACITY`].
    ///
    /// Default: 1
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.clamp(1, MAX_CAPACITY);
        self
    }

    /// Seeds the producer's random source for reproducible scores.
    ///
    /// Default: None (seeded from the operating system)
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Registers a callback invoked for every received score.
    ///
    /// # Example
    /// ```rust
    /// use shuriken_channel::StreamingRunner;
    ///
    /// let runner = StreamingRunner::builder()
    ///     .on_score_received(|_round, score| println!("You scored: {}", score))
    ///     .build();
    /// ```
    pub fn on_score_received<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, u32) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let ChannelEvent::ScoreReceived { round, score, .. } = event {
                f(*round, *score);
            }
        }));
        self
    }

    /// Registers a callback invoked when the consumer observes closure, with
    /// the number of values received.
    pub fn on_channel_closed<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let ChannelEvent::ChannelClosed { received, .. } = event {
                f(*received);
            }
        }));
        self
    }

    /// Registers a raw listener receiving every channel event.
    pub fn listener<L>(mut self, listener: L) -> Self
    where
        L: EventListener<ChannelEvent> + 'static,
    {
        self.event_listeners.add(listener);
        self
    }

    /// Builds the runner.
    pub fn build(self) -> crate::StreamingRunner {
        crate::StreamingRunner::new(StreamingConfig {
            name: self.name,
            rounds: self.rounds,
            max_score: self.max_score,
            capacity: self.capacity,
            seed: self.seed,
            event_listeners: self.event_listeners,
        })
    }
}

impl Default for StreamingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
