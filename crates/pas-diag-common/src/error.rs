//! Error types for PAS diagnostic operations.
//!
//! This module defines the error types used throughout the diagnostic
//! crates. All errors implement `std::error::Error` via `thiserror`.

use std::io;
use thiserror::Error;

/// Result type alias for diagnostic operations.
pub type DiagResult<T> = Result<T, DiagError>;

/// Errors that can occur during a diagnostic run.
#[derive(Debug, Error)]
pub enum DiagError {
    /// Failed to spawn an external command.
    #[error("Failed to execute command '{command}': {source}")]
    Spawn {
        /// The command that failed to execute.
        command: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// External command returned non-zero exit code.
    #[error("Command failed: '{command}' (exit code {exit_code}): {output}")]
    CommandFailed {
        /// The command that failed.
        command: String,
        /// The exit code.
        exit_code: i32,
        /// Combined stdout/stderr output.
        output: String,
    },

    /// Command output did not have the expected shape.
    #[error("Malformed output from '{command}': {detail}")]
    MalformedOutput {
        /// The command whose output could not be parsed.
        command: String,
        /// What was wrong with the output.
        detail: String,
    },

    /// Command produced no output where a value was required.
    #[error("Empty output from '{command}'")]
    EmptyOutput {
        /// The command that produced nothing.
        command: String,
    },
}

impl DiagError {
    /// Creates a malformed output error.
    pub fn malformed_output(command: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedOutput {
            command: command.into(),
            detail: detail.into(),
        }
    }

    /// Creates an empty output error.
    pub fn empty_output(command: impl Into<String>) -> Self {
        Self::EmptyOutput {
            command: command.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_output_display() {
        let err = DiagError::malformed_output("opx-show-transceivers summary", "expected 2 columns");
        assert_eq!(
            err.to_string(),
            "Malformed output from 'opx-show-transceivers summary': expected 2 columns"
        );
    }

    #[test]
    fn test_empty_output_display() {
        let err = DiagError::empty_output("cps_get_oid.py observed/base-pas/media port=1");
        assert!(err.to_string().starts_with("Empty output from"));
    }

    #[test]
    fn test_command_failed_display() {
        let err = DiagError::CommandFailed {
            command: "opx-show-transceivers summary".to_string(),
            exit_code: 2,
            output: "no such tool".to_string(),
        };
        assert!(err.to_string().contains("opx-show-transceivers"));
        assert!(err.to_string().contains("exit code 2"));
    }
}
