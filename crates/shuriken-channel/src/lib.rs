//! Channel demonstrations.
//!
//! Three small programs, each showing one channel guarantee:
//!
//! - [`SignalRunner`]: a worker writes one completion signal into a one-shot
//!   channel and the driver blocks on the read. The send happens-before the
//!   read returns, so the driver cannot resume early.
//! - [`BufferedChannel`]: sends succeed without a receiver only while the
//!   buffer has room. The send after that would deadlock; the demo bounds it
//!   and reports [`ShurikenError::Blocked`](shuriken_core::ShurikenError::Blocked).
//! - [`StreamingRunner`]: a producer sends a fixed number of random scores and
//!   closes the channel; the consumer receives them in order and then sees the
//!   closure exactly once.
//!
//! # Example
//!
//! ```rust,no_run
//! use shuriken_channel::StreamingRunner;
//!
//! # async fn example() -> shuriken_core::Result<()> {
//! let report = StreamingRunner::builder()
//!     .rounds(3)
//!     .on_score_received(|_, score| println!("You scored: {}", score))
//!     .build()
//!     .run()
//!     .await?;
//! assert!(report.closed);
//! # Ok(())
//! # }
//! ```

mod buffered;
mod config;
mod events;
mod signal;
mod streaming;

pub use buffered::{BufferedChannel, BufferedReport};
pub use config::{
    BufferedConfig, BufferedConfigBuilder, SignalConfig, SignalConfigBuilder, StreamingConfig,
    StreamingConfigBuilder, MAX_CAPACITY,
};
pub use events::ChannelEvent;
pub use signal::{SignalReport, SignalRunner};
pub use streaming::{StreamReport, StreamingRunner};
