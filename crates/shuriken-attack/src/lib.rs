//! Simulated work and the simplest ways to run it.
//!
//! An [`Attacker`] is one unit of simulated work: it announces an attack on a
//! [`Target`](shuriken_core::Target) and then takes a fixed latency to carry
//! it out. Two runners drive it:
//!
//! - [`SequentialRunner`] attacks each target in turn. Total time is the sum of
//!   the latencies.
//! - [`FireAndForgetRunner`] spawns a detached task per target. With the
//!   default [`WaitStrategy::Join`] the driver waits on a join counter; the
//!   [`WaitStrategy::FixedDelay`] variant sleeps instead and is kept as a
//!   known-bad example.
//!
//! Both runners are generic over any `tower::Service<Target, Response = ()>`,
//! so the attacker can be swapped for instrumented work.
//!
//! # Example
//!
//! ```rust,no_run
//! use shuriken_attack::{Attacker, FireAndForgetRunner};
//! use shuriken_core::default_targets;
//! use std::time::Duration;
//!
//! # async fn example() -> shuriken_core::Result<()> {
//! let attacker = Attacker::builder()
//!     .latency(Duration::from_secs(1))
//!     .on_attack_started(|target| println!("Throwing ninja stars at {}", target))
//!     .build();
//!
//! let report = FireAndForgetRunner::builder()
//!     .build()
//!     .run(attacker, default_targets())
//!     .await?;
//!
//! println!(
//!     "Attack with concurrency took {:?} ({}/{} finished)",
//!     report.elapsed, report.completed, report.launched
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `tracing`: debug logs for runs and detached task failures
//! - `metrics`: `shuriken_attacks_total`, `shuriken_tasks_launched_total`,
//!   `shuriken_tasks_completed_total` and `shuriken_run_duration_seconds`

mod attacker;
mod config;
mod events;
mod fire_and_forget;
mod sequential;

pub use attacker::Attacker;
pub use config::{AttackerConfig, AttackerConfigBuilder, RunnerBuilder, RunnerConfig, WaitStrategy};
pub use events::{AttackEvent, RunEvent};
pub use fire_and_forget::FireAndForgetRunner;
pub use sequential::SequentialRunner;
