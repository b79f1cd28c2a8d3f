//! CLI module
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server
//! - check: vet a submission against the guard without executing it
//! - lessons: print the catalog summaries

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, lessons, run, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
