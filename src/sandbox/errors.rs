//! Sandbox error types
//!
//! Validation errors reject the whole submission before anything executes.
//! Execution errors are not represented here: they are reported per
//! statement inside the execution report, with execution stopping at the
//! first failure.

use thiserror::Error;

use super::guard::RejectReason;

/// Result type for sandbox operations
pub type SandboxResult<T> = Result<T, SandboxError>;

/// Errors raised before or while setting up execution
#[derive(Debug, Clone, Error)]
pub enum SandboxError {
    /// Submission was empty or contained no statements
    #[error("No query provided")]
    EmptyQuery,

    /// Submission exceeded the statement cap
    #[error("Too many statements. Max 15.")]
    TooManyStatements { found: usize },

    /// A statement failed the safety guard
    #[error("Statement {index} is not safe: {reason}")]
    UnsafeStatement { index: usize, reason: RejectReason },

    /// The in-memory database could not be seeded
    #[error("Failed to prepare sandbox database: {0}")]
    Seed(String),

    /// Execution task failed outside the engine
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SandboxError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "DOJO_EMPTY_QUERY",
            Self::TooManyStatements { .. } => "DOJO_TOO_MANY_STATEMENTS",
            Self::UnsafeStatement { .. } => "DOJO_UNSAFE_STATEMENT",
            Self::Seed(_) => "DOJO_SEED_FAILED",
            Self::Internal(_) => "DOJO_INTERNAL",
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyQuery => 400,
            Self::TooManyStatements { .. } => 400,
            Self::UnsafeStatement { .. } => 400,
            Self::Seed(_) => 500,
            Self::Internal(_) => 500,
        }
    }
}
