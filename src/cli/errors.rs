//! CLI-specific error types

use std::fmt;
use std::io;

use crate::http_server::ConfigError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// Server failed to boot or crashed
    BootFailed,
    /// A vetted submission was rejected
    CheckFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "DOJO_CLI_CONFIG_ERROR",
            Self::IoError => "DOJO_CLI_IO_ERROR",
            Self::BootFailed => "DOJO_CLI_BOOT_FAILED",
            Self::CheckFailed => "DOJO_CLI_CHECK_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Check failure
    pub fn check_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::CheckFailed, msg)
    }

    /// Get the error code
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
