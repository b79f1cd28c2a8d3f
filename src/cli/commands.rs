//! CLI command implementations
//!
//! `serve` boots the HTTP server; `check` and `lessons` are one-shot
//! commands that print JSON to stdout and exit.

use std::io::{self, Write};
use std::path::Path;

use serde_json::json;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::lessons::LessonCatalog;
use crate::observability::{log_event, Event};
use crate::sandbox::{split_statements, StatementGuard};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { config } => serve(&config),
        Command::Check { sql } => check(&sql),
        Command::Lessons => lessons(),
    }
}

/// Start the HTTP server.
///
/// A missing config file is not an error: the server starts with defaults,
/// which is the common development setup.
pub fn serve(config_path: &Path) -> CliResult<()> {
    log_event(Event::BootStart, &[]);

    let config = if config_path.exists() {
        let config = HttpServerConfig::load(config_path)?;
        log_event(
            Event::ConfigLoaded,
            &[("path", &config_path.display().to_string())],
        );
        config
    } else {
        log_event(
            Event::ConfigDefaulted,
            &[("path", &config_path.display().to_string())],
        );
        HttpServerConfig::default()
    };

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Vet a submission against the guard without executing anything.
///
/// Prints one JSON line per statement. Returns an error (non-zero exit)
/// when any statement is rejected, so the command is scriptable.
pub fn check(sql: &str) -> CliResult<()> {
    let statements = split_statements(sql);
    if statements.is_empty() {
        return Err(CliError::check_failed("No query provided"));
    }

    let guard = StatementGuard::new();
    let mut rejected = 0usize;
    let mut stdout = io::stdout();

    for (i, statement) in statements.iter().enumerate() {
        let verdict = match guard.check(statement) {
            Ok(()) => json!({
                "index": i + 1,
                "statement": statement,
                "allowed": true,
            }),
            Err(reason) => {
                rejected += 1;
                json!({
                    "index": i + 1,
                    "statement": statement,
                    "allowed": false,
                    "reason": reason.message(),
                })
            }
        };
        writeln!(stdout, "{}", verdict)?;
    }
    stdout.flush()?;

    if rejected > 0 {
        return Err(CliError::check_failed(format!(
            "{} of {} statements rejected",
            rejected,
            statements.len()
        )));
    }
    Ok(())
}

/// Print lesson catalog summaries as JSON.
pub fn lessons() -> CliResult<()> {
    let catalog = LessonCatalog::builtin();
    let summaries = catalog.summaries();

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &summaries)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
