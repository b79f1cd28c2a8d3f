//! CLI argument definitions using clap
//!
//! Commands:
//! - sqldojo serve --config <path>
//! - sqldojo check <sql>
//! - sqldojo lessons

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sqldojo - an interactive SQL tutorial with a disposable practice sandbox
#[derive(Parser, Debug)]
#[command(name = "sqldojo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when the file is absent)
        #[arg(long, default_value = "./sqldojo.json")]
        config: PathBuf,
    },

    /// Vet a SQL submission against the sandbox guard without executing it
    Check {
        /// The SQL text to vet; may contain multiple `;`-separated statements
        sql: String,
    },

    /// Print the lesson catalog summaries as JSON
    Lessons,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
