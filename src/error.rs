//! Error types for stationup operations.
//!
//! This module defines [`StationupError`], the error type for anything that
//! stops the tool from reaching a decision (bad config, broken terminal,
//! unspawnable process), and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Bootstrap failures (privilege, network, import checks) are *outcomes*,
//!   reported through [`FailureKind`](crate::runner::FailureKind), not errors
//! - Use `StationupError` for failures of the tool itself
//! - Use `anyhow::Error` (via `StationupError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stationup operations.
#[derive(Debug, Error)]
pub enum StationupError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Shell command could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// An interactive prompt could not be shown or answered.
    #[error("Prompt '{key}' failed: {message}")]
    PromptFailed { key: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StationupError {
    /// Whether this error comes from loading or validating configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for stationup operations.
pub type Result<T> = std::result::Result<T, StationupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = StationupError::ConfigNotFound {
            path: PathBuf::from("/srv/station/.stationup/config.yml"),
        };
        assert!(err.to_string().contains("/srv/station/.stationup/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = StationupError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = StationupError::ConfigValidationError {
            message: "no dependencies listed".into(),
        };
        assert!(err.to_string().contains("no dependencies listed"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = StationupError::CommandFailed {
            command: "pip3 install requests".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip3 install requests"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn prompt_failed_displays_key() {
        let err = StationupError::PromptFailed {
            key: "use_mirror".into(),
            message: "not a terminal".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("use_mirror"));
        assert!(msg.contains("not a terminal"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: StationupError = io_err.into();
        assert!(matches!(err, StationupError::Io(_)));
    }

    #[test]
    fn config_errors_are_classified() {
        let err = StationupError::ConfigValidationError {
            message: "x".into(),
        };
        assert!(err.is_config_error());

        let err = StationupError::CommandFailed {
            command: "sh".into(),
            code: None,
        };
        assert!(!err.is_config_error());
    }
}
