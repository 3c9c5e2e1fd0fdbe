//! Small, observable concurrency demonstrations.
//!
//! Each demo isolates one guarantee (or the lack of one) and reports what it
//! observed, so the guarantee can be checked in a test rather than eyeballed
//! in console output.
//!
//! | Feature | Crate | Demonstrates |
//! |---|---|---|
//! | `attack` | [`attack`] | Sequential vs. concurrent work; fire-and-forget with a fixed-delay or joined wait |
//! | `channel` | [`channel`] | One-shot completion signal, bounded buffer overflow, close-terminated streams |
//! | `join` | [`join`] | Barrier over a counted set of tasks |
//! | `mutex` | [`mutex`] | Lost updates with and without a lock, and with a fixed-delay wait |
//!
//! Enable `full` for all of them. The `tracing` and `metrics` features are
//! forwarded to every enabled demo.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "full")]
//! # async fn example() -> shuriken::core::Result<()> {
//! use shuriken::attack::{Attacker, SequentialRunner};
//! use shuriken::core::default_targets;
//!
//! let attacker = Attacker::builder()
//!     .on_attack_started(|target| println!("Throwing ninja stars at {}", target))
//!     .build();
//!
//! let report = SequentialRunner::builder()
//!     .build()
//!     .run(attacker, default_targets())
//!     .await?;
//! println!("Attack without concurrency took {:?}", report.elapsed);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export core (always available)
pub use shuriken_core as core;

// Re-export demos based on features
#[cfg(feature = "attack")]
pub use shuriken_attack as attack;

#[cfg(feature = "channel")]
pub use shuriken_channel as channel;

#[cfg(feature = "join")]
pub use shuriken_join as join;

#[cfg(feature = "mutex")]
pub use shuriken_mutex as mutex;
