//! Practice sandbox subsystem
//!
//! Validates and executes student SQL against a disposable, freshly seeded
//! in-memory SQLite database.
//!
//! # Pipeline (strict order)
//!
//! 1. Split the submission on `;` and drop empty fragments
//! 2. Enforce the statement cap
//! 3. Vet every statement with the allow/deny guard
//! 4. Seed a fresh in-memory database
//! 5. Execute sequentially, stopping at the first engine error
//!
//! # Invariants
//!
//! - No state survives a submission; every call reseeds
//! - The guard vets all statements before any of them runs
//! - Per-statement outcomes keep their 1-based submission order

mod errors;
mod executor;
mod guard;
mod result;
mod seed;
mod statement;

pub use errors::{SandboxError, SandboxResult};
pub use executor::SandboxExecutor;
pub use guard::{RejectReason, StatementGuard, ALLOWED_STATEMENTS};
pub use result::{ExecutionReport, StatementOutcome};
pub use seed::seeded_connection;
pub use statement::{is_select, leading_keyword, split_statements, MAX_STATEMENTS};
