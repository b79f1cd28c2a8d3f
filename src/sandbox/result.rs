//! Execution report types
//!
//! These are the wire types returned by `POST /api/execute`. Keys are
//! camelCase because the browser client consumes them directly.

use serde::Serialize;
use serde_json::Value;

/// Outcome of a single statement.
///
/// Serializes untagged so each shape matches what the frontend expects:
/// a rows payload for SELECT, a change summary for everything else, and an
/// error record when the engine rejected the statement.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StatementOutcome {
    /// SELECT result set
    #[serde(rename_all = "camelCase")]
    Rows {
        statement_number: usize,
        statement: String,
        success: bool,
        columns: Vec<String>,
        data: Vec<Value>,
        row_count: usize,
    },

    /// DML/DDL acknowledgement with affected-row count
    #[serde(rename_all = "camelCase")]
    Change {
        statement_number: usize,
        statement: String,
        success: bool,
        message: String,
        row_count: usize,
    },

    /// Engine-level failure; always the last entry of a stopped run
    #[serde(rename_all = "camelCase")]
    Failed {
        statement_number: usize,
        statement: String,
        success: bool,
        error: String,
    },
}

impl StatementOutcome {
    /// Build a SELECT outcome.
    pub fn rows(number: usize, statement: &str, columns: Vec<String>, data: Vec<Value>) -> Self {
        let row_count = data.len();
        Self::Rows {
            statement_number: number,
            statement: statement.to_string(),
            success: true,
            columns,
            data,
            row_count,
        }
    }

    /// Build a non-SELECT outcome.
    pub fn change(number: usize, statement: &str, affected: usize) -> Self {
        Self::Change {
            statement_number: number,
            statement: statement.to_string(),
            success: true,
            message: "Success".to_string(),
            row_count: affected,
        }
    }

    /// Build a failed outcome carrying the engine's error text.
    pub fn failed(number: usize, statement: &str, error: String) -> Self {
        Self::Failed {
            statement_number: number,
            statement: statement.to_string(),
            success: false,
            error,
        }
    }

    /// Whether this statement completed.
    pub fn is_success(&self) -> bool {
        match self {
            Self::Rows { success, .. } => *success,
            Self::Change { success, .. } => *success,
            Self::Failed { success, .. } => *success,
        }
    }

    /// 1-based position of the statement in the submission.
    pub fn statement_number(&self) -> usize {
        match self {
            Self::Rows { statement_number, .. } => *statement_number,
            Self::Change { statement_number, .. } => *statement_number,
            Self::Failed { statement_number, .. } => *statement_number,
        }
    }
}

/// Report for a whole submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    /// False iff execution stopped at a failing statement
    pub success: bool,
    /// More than one statement was submitted
    pub multi_statement: bool,
    /// Statements accepted after splitting
    pub total_statements: usize,
    /// Statements that produced an outcome (including the failing one)
    pub executed_statements: usize,
    /// Execution stopped before the end of the submission
    pub stopped: bool,
    /// Per-statement outcomes, in submission order
    pub results: Vec<StatementOutcome>,
}

impl ExecutionReport {
    /// Assemble a report from per-statement outcomes.
    pub fn new(total_statements: usize, stopped: bool, results: Vec<StatementOutcome>) -> Self {
        Self {
            success: !stopped,
            multi_statement: total_statements > 1,
            total_statements,
            executed_statements: results.len(),
            stopped,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_outcome_serializes_camel_case() {
        let outcome = StatementOutcome::rows(
            1,
            "SELECT name FROM students",
            vec!["name".to_string()],
            vec![json!({"name": "Kenji Sato"})],
        );
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["statementNumber"], 1);
        assert_eq!(value["rowCount"], 1);
        assert_eq!(value["success"], true);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_change_outcome_carries_affected_count() {
        let outcome = StatementOutcome::change(2, "DELETE FROM gear", 8);
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["rowCount"], 8);
        assert_eq!(value["message"], "Success");
        assert!(value.get("columns").is_none());
    }

    #[test]
    fn test_failed_outcome_has_no_row_count() {
        let outcome = StatementOutcome::failed(3, "SELECT * FROM ghosts", "no such table".into());
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "no such table");
        assert!(value.get("rowCount").is_none());
    }

    #[test]
    fn test_report_flags() {
        let report = ExecutionReport::new(
            2,
            true,
            vec![
                StatementOutcome::change(1, "DELETE FROM gear", 8),
                StatementOutcome::failed(2, "SELECT * FROM ghosts", "no such table".into()),
            ],
        );
        assert!(!report.success);
        assert!(report.stopped);
        assert!(report.multi_statement);
        assert_eq!(report.total_statements, 2);
        assert_eq!(report.executed_statements, 2);
    }
}
