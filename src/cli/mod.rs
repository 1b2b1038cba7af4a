//! CLI module for formguard
//!
//! Provides the command-line interface:
//! - init: create the data directory layout
//! - list: list declared targets
//! - check: load everything and build every descriptor
//! - inspect: print one target's descriptor JSON

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, init, inspect, list, run};
pub use errors::{CliError, CliResult};
