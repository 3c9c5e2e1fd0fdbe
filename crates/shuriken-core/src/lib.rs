//! Core infrastructure for shuriken.
//!
//! This crate provides shared functionality used by every demonstration:
//! - Event system for observing runs
//! - [`JoinCounter`], the wait-group barrier used wherever a driver must know
//!   that all of its tasks finished
//! - Run reports and the shared error type

pub mod error;
pub mod events;
pub mod join_counter;
pub mod report;
pub mod target;

pub use error::{BoxError, Result, ShurikenError};
pub use events::{BoxedEventListener, DemoEvent, EventListener, EventListeners, FnListener};
pub use join_counter::{DoneGuard, JoinCounter};
pub use report::RunReport;
pub use target::{default_targets, Target};
