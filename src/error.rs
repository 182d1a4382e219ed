//! Error types for iconfinder operations.
//!
//! This module defines [`IconfinderError`], the error type used by the task
//! runner, configuration loading and the CLI, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Use `IconfinderError` for failures the CLI maps to a distinct exit code
//! - API failures are [`ApiError`](crate::api::ApiError) and convert via `From`
//! - Use `anyhow::Error` (via `IconfinderError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::api::ApiError;

/// Exit code for usage errors such as an unknown operation.
pub const EXIT_USAGE: u8 = 2;

/// Exit code when the external tool could not be started.
pub const EXIT_NOT_FOUND: u8 = 127;

/// Core error type for iconfinder operations.
#[derive(Debug, Error)]
pub enum IconfinderError {
    /// Operation name not in the fixed set for the active variant.
    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// External tool could not be spawned or waited on.
    #[error("Failed to run {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact removal failed during `clean`.
    #[error("Failed to remove {path}: {source}")]
    CleanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Iconfinder API error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconfinderError {
    /// Process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownOperation { .. } => EXIT_USAGE,
            Self::SpawnFailed { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                EXIT_NOT_FOUND
            }
            _ => 1,
        }
    }
}

/// Result type alias for iconfinder operations.
pub type Result<T> = std::result::Result<T, IconfinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_operation_displays_name() {
        let err = IconfinderError::UnknownOperation {
            name: "deploy".into(),
        };
        assert_eq!(err.to_string(), "Unknown operation: deploy");
    }

    #[test]
    fn unknown_operation_is_usage_error() {
        let err = IconfinderError::UnknownOperation {
            name: "deploy".into(),
        };
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = IconfinderError::ConfigParseError {
            path: PathBuf::from("/iconfinder.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/iconfinder.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn missing_program_maps_to_127() {
        let err = IconfinderError::SpawnFailed {
            program: "nosetests".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("nosetests"));
        assert_eq!(err.exit_code(), EXIT_NOT_FOUND);
    }

    #[test]
    fn other_spawn_failure_maps_to_1() {
        let err = IconfinderError::SpawnFailed {
            program: "flake8".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn clean_failure_displays_path() {
        let err = IconfinderError::CleanFailed {
            path: PathBuf::from("build"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("build"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn api_error_converts() {
        let err: IconfinderError = ApiError::NotFound {
            message: "gone".into(),
        }
        .into();
        assert!(matches!(err, IconfinderError::Api(_)));
        assert_eq!(err.to_string(), "gone");
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: IconfinderError = io_err.into();
        assert!(matches!(err, IconfinderError::Io(_)));
    }
}
