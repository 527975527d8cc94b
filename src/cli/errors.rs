//! CLI-specific error types

use std::io;

use thiserror::Error;

use crate::http_server::ConfigError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or environment error
    ConfigError,
    /// I/O error (stdin/stdout, sockets)
    IoError,
    /// Server could not start
    BootFailed,
    /// A client operation was reported as failed
    CommandFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "STOCK_CLI_CONFIG_ERROR",
            Self::IoError => "STOCK_CLI_IO_ERROR",
            Self::BootFailed => "STOCK_CLI_BOOT_FAILED",
            Self::CommandFailed => "STOCK_CLI_COMMAND_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug, Error)]
#[error("{}: {message}", .code.code())]
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

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn command_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::CommandFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::boot_failed(format!("Failed to open item store: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
