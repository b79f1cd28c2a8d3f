//! sqldojo - an interactive SQL tutorial with a disposable practice sandbox
//!
//! The crate is split into four subsystems:
//! - `lessons`: the hardcoded lesson catalog
//! - `sandbox`: statement splitting, the safety guard, and execution against
//!   a freshly seeded in-memory SQLite database
//! - `http_server`: the axum API and static frontend serving
//! - `cli`: the `serve` / `check` / `lessons` commands

pub mod cli;
pub mod http_server;
pub mod lessons;
pub mod observability;
pub mod sandbox;
