//! Claimlens CLI library.
//!
//! Core functionality for the `claimlens` command-line interface:
//! configuration management, pipeline wiring, command execution and
//! report formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
