//! Observable lifecycle and request events

use std::fmt;

/// Events the server emits over its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded from file
    ConfigLoaded,
    /// Configuration file absent, defaults in effect
    ConfigDefaulted,
    /// Listener bound, ready to serve
    ServerListening,

    // Sandbox requests
    /// A submission arrived at the execute endpoint
    QueryReceived,
    /// A submission was rejected by validation or the guard
    QueryRejected,
    /// A submission executed (possibly stopping early)
    QueryExecuted,
}

impl Event {
    /// Event name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ConfigDefaulted => "CONFIG_DEFAULTED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::QueryReceived => "QUERY_RECEIVED",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::QueryExecuted => "QUERY_EXECUTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
