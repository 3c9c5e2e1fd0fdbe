//! Mutex-protected shared counter.
//!
//! Launches N tasks that each increment one shared counter. With the lock in
//! place the increments are serialised and none is lost, so a driver that
//! joins every task reads exactly N.
//!
//! Two variants exist for contrast:
//!
//! - [`CounterMode::FixedDelay`] keeps the lock but replaces the join with a
//!   sleep. If the tasks are not done in time the value read is short.
//! - [`CounterMode::Unlocked`] keeps the join but drops the lock. Concurrent
//!   read-modify-write sequences overwrite each other.
//!
//! # Example
//!
//! ```rust,no_run
//! use shuriken_mutex::MutexCounter;
//!
//! # async fn example() -> shuriken_core::Result<()> {
//! let report = MutexCounter::builder().tasks(1000).build().run().await?;
//! assert_eq!(report.observed, 1000);
//! # Ok(())
//! # }
//! ```

mod config;
mod counter;
mod events;

pub use config::{CounterMode, MutexCounterConfig, MutexCounterConfigBuilder};
pub use counter::{CounterReport, MutexCounter};
pub use events::CounterEvent;
