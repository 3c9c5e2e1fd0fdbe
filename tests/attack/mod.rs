//! Test organization:
//! - sequential.rs: elapsed-time bounds and ordering
//! - fire_and_forget.rs: joined vs. fixed-delay waiting

mod fire_and_forget;
mod sequential;
