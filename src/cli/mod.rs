//! CLI module
//!
//! Command-line interface for the Seshat client.
//!
//! # Commands
//!
//! - `classes` - List registered variable classes
//! - `resolve` - Show how a class name resolves
//! - `records` - Print the records of a class
//! - `count` - Print the record count of a class
//! - `frequencies` - Per-year value frequencies across classes

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
