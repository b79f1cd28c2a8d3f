//! Observability subsystem
//!
//! Structured JSON logging with explicit severities and typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only; it never affects request handling
//! 2. No async or background threads
//! 3. Deterministic output (sorted keys, no timestamps)

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields at INFO level.
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::info(event.as_str(), fields);
}
