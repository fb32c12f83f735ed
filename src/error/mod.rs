// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitvet.
//!
//! Only fatal conditions are errors: a configuration artifact that cannot
//! be loaded, or a message with no parseable header. Rule violations are
//! ordinary data and live in [`crate::rules::Report`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitvet operations.
#[derive(Error, Debug)]
pub enum VetError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Message parse errors
    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    // Check outcomes that must fail the process
    #[error("Check failed: {0}")]
    Check(#[from] CheckError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors. All of them abort the run before any
/// message is evaluated.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to render configuration: {message}")]
    RenderError { message: String },
}

/// Errors from parsing a commit message.
///
/// A message that offers no conventional header cannot be checked against
/// the rules at all, so these are fatal rather than violations.
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("Empty commit message")]
    Empty,

    #[error("Header does not match '<type>(<scope>): <subject>': {header:?}")]
    MalformedHeader { header: String },

    #[error("Header has nothing after the colon: {header:?}")]
    MissingSubject { header: String },
}

/// A completed check run whose violations require a failing exit.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("found {errors} problems, {warnings} warnings")]
    ViolationsFound { errors: usize, warnings: usize },
}

/// Result type alias for commitvet operations.
pub type Result<T> = std::result::Result<T, VetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_message_error_display() {
        let err = MessageError::MalformedHeader {
            header: "Fix bug".to_string(),
        };
        assert!(err.to_string().contains("Fix bug"));
    }

    #[test]
    fn test_check_error_display() {
        let err = CheckError::ViolationsFound {
            errors: 2,
            warnings: 1,
        };
        assert!(err.to_string().contains("2 problems"));
        assert!(err.to_string().contains("1 warnings"));
    }

    #[test]
    fn test_vet_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            key: "header-max-length".to_string(),
            message: "a limit is required".to_string(),
        };
        let vet_err: VetError = config_err.into();
        assert!(vet_err.to_string().contains("header-max-length"));
    }
}
