//! crlog CLI library
//!
//! This library provides the command-line interface for the crlog
//! carriage-return log filter.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use commands::Cli;
pub use error::{CliError, CliResult};
