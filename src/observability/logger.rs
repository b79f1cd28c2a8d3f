//! Structured JSON logger
//!
//! One log line = one event. Lines are single JSON objects with the event
//! name, a severity, and flat string fields. Keys are emitted in sorted
//! order so output is deterministic and diffable in tests.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Diagnostic detail
    Debug = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// String form used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
///
/// Errors go to stderr, everything else to stdout. A logging failure is
/// swallowed; it must never take the server down.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        match severity {
            Severity::Error => Self::write_line(severity, event, fields, &mut io::stderr()),
            _ => Self::write_line(severity, event, fields, &mut io::stdout()),
        }
    }

    fn write_line<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], out: &mut W) {
        // serde_json::Map is backed by a BTreeMap, so keys serialize sorted
        let mut object = Map::new();
        object.insert("event".to_string(), Value::from(event));
        object.insert("severity".to_string(), Value::from(severity.as_str()));
        for (key, value) in fields {
            object.insert((*key).to_string(), Value::from(*value));
        }

        let line = Value::Object(object).to_string();
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }

    /// Log at DEBUG level
    pub fn debug(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Debug, event, fields);
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }
}

/// Render a log line to a string for testing.
#[cfg(test)]
pub fn capture_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::write_line(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
