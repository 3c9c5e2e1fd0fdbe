//! Library half of the `shuriken` binary: argument definitions and the
//! subcommand handlers, split out so they can be tested.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
