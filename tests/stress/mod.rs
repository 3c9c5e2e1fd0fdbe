//! Stress tests for the shuriken demos.
//!
//! ## What We Test
//!
//! - **High concurrency**: tens of thousands of tasks behind one barrier
//! - **Lock necessity**: removing the lock loses updates under contention
//! - **State consistency**: exact counts with the lock in place

pub mod attack;
pub mod join;
pub mod mutex;
