//! Statement safety guard
//!
//! Best-effort textual filtering for the teaching sandbox:
//! - An allow-list of leading keywords decides which statement kinds may run.
//! - A deny-list of regex patterns catches operations that would escape the
//!   sandbox (attaching databases, pragmas, comment smuggling, file I/O).
//!
//! The guard is textual by design. It protects a disposable in-memory
//! database that is rebuilt on every request, not real data.

use regex::Regex;
use std::fmt;

use super::statement::leading_keyword;

/// Statement kinds students may run, by leading keyword.
pub const ALLOWED_STATEMENTS: &[&str] =
    &["SELECT", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER"];

/// Patterns that reject a statement outright, matched case-insensitively.
const DENY_PATTERNS: &[&str] = &[
    r"(?i)\bDROP\s+DATABASE\b",
    r"(?i)\bDROP\s+SCHEMA\b",
    r"(?i)\bEXEC\b",
    r"(?i)\bEXECUTE\b",
    r"(?i)\bATTACH\b",
    r"(?i)\bDETACH\b",
    r"(?i)\bPRAGMA\b",
    r"--",
    r"/\*",
    r"(?i)\bLOAD_FILE\b",
    r"(?i)\bINTO\s+OUTFILE\b",
    r"(?i)\bINTO\s+DUMPFILE\b",
];

/// Why the guard rejected a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Leading keyword is not on the allow-list.
    DisallowedStatement,
    /// A deny-list pattern matched.
    DangerousPattern,
}

impl RejectReason {
    /// Human-readable message shown to the student.
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::DisallowedStatement => {
                "Only SELECT, INSERT, UPDATE, DELETE, CREATE, and ALTER statements are allowed."
            }
            RejectReason::DangerousPattern => "Dangerous operation detected.",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Allow/deny filter applied to every statement before execution.
///
/// Compiling the deny patterns is not free, so the guard is built once and
/// shared (it is `Send + Sync`).
pub struct StatementGuard {
    denied: Vec<Regex>,
}

impl StatementGuard {
    /// Build a guard with the built-in policy.
    pub fn new() -> Self {
        let denied = DENY_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("deny pattern is a valid regex"))
            .collect();

        Self { denied }
    }

    /// Check a single statement against the policy.
    pub fn check(&self, statement: &str) -> Result<(), RejectReason> {
        let allowed = leading_keyword(statement)
            .map(|keyword| ALLOWED_STATEMENTS.contains(&keyword.as_str()))
            .unwrap_or(false);

        if !allowed {
            return Err(RejectReason::DisallowedStatement);
        }

        for pattern in &self.denied {
            if pattern.is_match(statement) {
                return Err(RejectReason::DangerousPattern);
            }
        }

        Ok(())
    }

    /// Check every statement, returning the 1-based index of the first
    /// offender. All statements are vetted before any of them executes.
    pub fn check_all(&self, statements: &[String]) -> Result<(), (usize, RejectReason)> {
        for (i, statement) in statements.iter().enumerate() {
            self.check(statement).map_err(|reason| (i + 1, reason))?;
        }
        Ok(())
    }
}

impl Default for StatementGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> StatementGuard {
        StatementGuard::new()
    }

    #[test]
    fn test_allows_each_listed_keyword() {
        let g = guard();
        assert!(g.check("SELECT * FROM students").is_ok());
        assert!(g.check("INSERT INTO gear (id) VALUES (99)").is_ok());
        assert!(g.check("UPDATE students SET medals = 9 WHERE id = 1").is_ok());
        assert!(g.check("DELETE FROM techniques WHERE id = 3").is_ok());
        assert!(g.check("CREATE TABLE forms (id INTEGER)").is_ok());
        assert!(g.check("ALTER TABLE gear ADD weight INTEGER").is_ok());
    }

    #[test]
    fn test_allow_list_is_case_insensitive() {
        let g = guard();
        assert!(g.check("select 1").is_ok());
        assert!(g.check("Insert into gear (id) values (1)").is_ok());
    }

    #[test]
    fn test_rejects_unknown_leading_keyword() {
        let g = guard();
        assert_eq!(
            g.check("DROP TABLE students"),
            Err(RejectReason::DisallowedStatement)
        );
        assert_eq!(g.check("VACUUM"), Err(RejectReason::DisallowedStatement));
        assert_eq!(
            g.check("WITH x AS (SELECT 1) SELECT * FROM x"),
            Err(RejectReason::DisallowedStatement)
        );
    }

    #[test]
    fn test_rejects_keyword_prefix_lookalikes() {
        // "SELECTION" starts with SELECT textually but is not the keyword
        assert_eq!(
            guard().check("SELECTION test"),
            Err(RejectReason::DisallowedStatement)
        );
    }

    #[test]
    fn test_rejects_non_alphabetic_start() {
        let g = guard();
        assert_eq!(g.check("(SELECT 1)"), Err(RejectReason::DisallowedStatement));
        assert_eq!(g.check("42"), Err(RejectReason::DisallowedStatement));
    }

    #[test]
    fn test_deny_patterns_inside_allowed_statements() {
        let g = guard();
        assert_eq!(
            g.check("SELECT 1; ATTACH DATABASE 'x' AS y"),
            Err(RejectReason::DangerousPattern)
        );
        assert_eq!(
            g.check("SELECT * FROM t -- sneaky"),
            Err(RejectReason::DangerousPattern)
        );
        assert_eq!(
            g.check("SELECT /* hidden */ 1"),
            Err(RejectReason::DangerousPattern)
        );
        assert_eq!(
            g.check("SELECT load_file('/etc/passwd')"),
            Err(RejectReason::DangerousPattern)
        );
        assert_eq!(
            g.check("SELECT * FROM t INTO OUTFILE '/tmp/x'"),
            Err(RejectReason::DangerousPattern)
        );
        assert_eq!(
            g.check("SELECT * INTO   DUMPFILE '/tmp/x'"),
            Err(RejectReason::DangerousPattern)
        );
    }

    #[test]
    fn test_deny_patterns_are_case_insensitive() {
        let g = guard();
        assert_eq!(
            g.check("select 1 where exec"),
            Err(RejectReason::DangerousPattern)
        );
        assert_eq!(
            g.check("sElEcT 1; PrAgMa journal_mode"),
            Err(RejectReason::DangerousPattern)
        );
    }

    #[test]
    fn test_word_boundary_spares_identifiers() {
        // "pragma_table_info" has no word boundary after "pragma", and
        // "executor" does not contain EXEC as a whole word.
        let g = guard();
        assert!(g.check("SELECT pragma_table_info FROM t").is_ok());
        assert!(g.check("SELECT executor FROM t").is_ok());
    }

    #[test]
    fn test_drop_table_blocked_by_allow_list_not_deny_list() {
        // DROP TABLE is absent from the deny patterns; the allow-list is what
        // keeps it out of the sandbox.
        assert_eq!(
            guard().check("DROP TABLE students"),
            Err(RejectReason::DisallowedStatement)
        );
    }

    #[test]
    fn test_check_all_reports_one_based_index() {
        let g = guard();
        let statements = vec![
            "SELECT 1".to_string(),
            "SELECT 2".to_string(),
            "PRAGMA journal_mode".to_string(),
        ];
        assert_eq!(
            g.check_all(&statements),
            Err((3, RejectReason::DangerousPattern))
        );
    }

    #[test]
    fn test_check_all_passes_clean_batch() {
        let g = guard();
        let statements = vec![
            "CREATE TABLE forms (id INTEGER)".to_string(),
            "INSERT INTO forms VALUES (1)".to_string(),
            "SELECT * FROM forms".to_string(),
        ];
        assert!(g.check_all(&statements).is_ok());
    }
}
