//! Sandbox execution pipeline
//!
//! Strict order for every submission:
//!
//! 1. Split the buffer into statements
//! 2. Enforce the statement cap
//! 3. Vet every statement with the guard (nothing runs if any fails)
//! 4. Seed a fresh in-memory database
//! 5. Execute sequentially, stopping at the first engine error
//!
//! The database is discarded when the report is assembled; no state crosses
//! request boundaries.

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde_json::{Map, Value};

use super::errors::{SandboxError, SandboxResult};
use super::guard::StatementGuard;
use super::result::{ExecutionReport, StatementOutcome};
use super::seed::seeded_connection;
use super::statement::{is_select, split_statements, MAX_STATEMENTS};

/// Executes vetted submissions against disposable seeded databases.
///
/// Cheap to share: holds only the compiled guard.
pub struct SandboxExecutor {
    guard: StatementGuard,
}

impl SandboxExecutor {
    /// Build an executor with the built-in guard policy.
    pub fn new() -> Self {
        Self {
            guard: StatementGuard::new(),
        }
    }

    /// Run a raw submission through the full pipeline.
    pub fn execute(&self, query: &str) -> SandboxResult<ExecutionReport> {
        let statements = split_statements(query);
        if statements.is_empty() {
            return Err(SandboxError::EmptyQuery);
        }
        if statements.len() > MAX_STATEMENTS {
            return Err(SandboxError::TooManyStatements {
                found: statements.len(),
            });
        }

        self.guard
            .check_all(&statements)
            .map_err(|(index, reason)| SandboxError::UnsafeStatement { index, reason })?;

        let conn = seeded_connection().map_err(|e| SandboxError::Seed(e.to_string()))?;

        let mut results = Vec::with_capacity(statements.len());
        let mut stopped = false;

        for (i, statement) in statements.iter().enumerate() {
            let number = i + 1;
            match run_statement(&conn, number, statement) {
                Ok(outcome) => results.push(outcome),
                Err(e) => {
                    results.push(StatementOutcome::failed(number, statement, e.to_string()));
                    stopped = true;
                    break;
                }
            }
        }

        Ok(ExecutionReport::new(statements.len(), stopped, results))
    }
}

impl Default for SandboxExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Execute one statement, producing rows for SELECT and a change summary
/// otherwise.
fn run_statement(
    conn: &Connection,
    number: usize,
    statement: &str,
) -> Result<StatementOutcome, rusqlite::Error> {
    if is_select(statement) {
        let mut prepared = conn.prepare(statement)?;
        let columns: Vec<String> = prepared
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut data = Vec::new();
        let mut rows = prepared.query([])?;
        while let Some(row) = rows.next()? {
            let mut object = Map::new();
            for (idx, column) in columns.iter().enumerate() {
                object.insert(column.clone(), json_value(row.get_ref(idx)?));
            }
            data.push(Value::Object(object));
        }

        Ok(StatementOutcome::rows(number, statement, columns, data))
    } else {
        let affected = conn.execute(statement, [])?;
        Ok(StatementOutcome::change(number, statement, affected))
    }
}

/// Map a SQLite value to JSON. BLOBs are rendered as lossy UTF-8 text, which
/// is good enough for a teaching dataset that stores none.
fn json_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::from(v),
        ValueRef::Real(v) => Value::from(v),
        ValueRef::Text(text) => Value::from(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(bytes) => Value::from(String::from_utf8_lossy(bytes).into_owned()),
    }
}
