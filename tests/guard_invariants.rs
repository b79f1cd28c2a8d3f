//! Guard invariant tests
//!
//! The safety guard is the gate between the editor and the engine:
//! - Only the six allow-listed statement kinds may run
//! - Deny patterns reject regardless of case or position
//! - Every statement is vetted before any statement executes

use sqldojo::sandbox::{
    split_statements, RejectReason, SandboxError, SandboxExecutor, StatementGuard,
    ALLOWED_STATEMENTS,
};

// =============================================================================
// Allow-list
// =============================================================================

#[test]
fn test_allow_list_covers_exactly_six_keywords() {
    assert_eq!(
        ALLOWED_STATEMENTS,
        &["SELECT", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER"]
    );
}

#[test]
fn test_every_allowed_keyword_passes() {
    let guard = StatementGuard::new();
    for statement in [
        "SELECT 1",
        "INSERT INTO gear (id) VALUES (9)",
        "UPDATE gear SET price = 0",
        "DELETE FROM gear",
        "CREATE TABLE t (id INTEGER)",
        "ALTER TABLE gear ADD note TEXT",
    ] {
        assert!(guard.check(statement).is_ok(), "rejected: {}", statement);
    }
}

#[test]
fn test_administrative_statements_never_pass() {
    let guard = StatementGuard::new();
    for statement in [
        "DROP TABLE students",
        "DROP DATABASE dojo",
        "VACUUM",
        "BEGIN TRANSACTION",
        "COMMIT",
        "GRANT ALL ON dojo TO public",
        "REPLACE INTO gear VALUES (1, 'x', 'y', 0, 'z')",
    ] {
        assert_eq!(
            guard.check(statement),
            Err(RejectReason::DisallowedStatement),
            "allowed: {}",
            statement
        );
    }
}

// =============================================================================
// Deny-list
// =============================================================================

#[test]
fn test_deny_patterns_reject_inside_allowed_statements() {
    let guard = StatementGuard::new();
    for statement in [
        "SELECT 1 FROM t WHERE x = 'a'; ATTACH DATABASE '/tmp/x' AS y",
        "SELECT 1 -- trailing comment",
        "SELECT /* block comment */ 1",
        "SELECT name FROM t WHERE exec",
        "CREATE TABLE t AS SELECT load_file('/etc/passwd')",
        "SELECT * FROM t INTO OUTFILE '/tmp/dump'",
        "SELECT * FROM t INTO DUMPFILE '/tmp/dump'",
        "UPDATE t SET x = 1 WHERE detach",
        "INSERT INTO t SELECT pragma FROM x",
    ] {
        assert_eq!(
            guard.check(statement),
            Err(RejectReason::DangerousPattern),
            "allowed: {}",
            statement
        );
    }
}

#[test]
fn test_deny_patterns_ignore_case() {
    let guard = StatementGuard::new();
    assert_eq!(
        guard.check("select 1 where AtTaCh"),
        Err(RejectReason::DangerousPattern)
    );
    assert_eq!(
        guard.check("SELECT 1 WHERE execute"),
        Err(RejectReason::DangerousPattern)
    );
}

#[test]
fn test_word_boundaries_protect_ordinary_identifiers() {
    let guard = StatementGuard::new();
    // Column names that merely contain a denied word as a substring
    assert!(guard.check("SELECT executor_name FROM staff").is_ok());
    assert!(guard.check("SELECT attachment_count FROM mail").is_ok());
    assert!(guard.check("SELECT pragmatic FROM words").is_ok());
}

#[test]
fn test_reject_messages_are_stable() {
    assert_eq!(
        RejectReason::DisallowedStatement.message(),
        "Only SELECT, INSERT, UPDATE, DELETE, CREATE, and ALTER statements are allowed."
    );
    assert_eq!(
        RejectReason::DangerousPattern.message(),
        "Dangerous operation detected."
    );
}

// =============================================================================
// Whole-submission vetting
// =============================================================================

#[test]
fn test_guard_runs_before_execution_touches_the_database() {
    // The first statement would mutate the sandbox; the second is denied.
    // The whole submission must be rejected with nothing executed.
    let executor = SandboxExecutor::new();
    let err = executor
        .execute("DELETE FROM students; DETACH DATABASE dojo")
        .unwrap_err();

    match err {
        SandboxError::UnsafeStatement { index, reason } => {
            assert_eq!(index, 2);
            assert_eq!(reason, RejectReason::DangerousPattern);
        }
        other => panic!("expected unsafe statement, got {:?}", other),
    }
}

#[test]
fn test_first_offender_index_is_reported() {
    let guard = StatementGuard::new();
    let statements = split_statements("SELECT 1; DROP TABLE t; PRAGMA x");
    assert_eq!(
        guard.check_all(&statements),
        Err((2, RejectReason::DisallowedStatement))
    );
}
