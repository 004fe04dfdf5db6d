//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SetupError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The Python runtime was not found anywhere on PATH. Fatal precondition;
    /// nothing has been installed or mutated when this is raised.
    #[error("Python was not found on PATH (tried: {candidates}). Install it from {download_url} and run this setup again")]
    RuntimeNotFound {
        candidates: String,
        download_url: String,
    },

    /// A venv or pip command exited non-zero (or could not be spawned).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The venv tool reported success but the expected interpreter is absent.
    #[error("Virtual environment at {path} has no interpreter after creation")]
    VenvIncomplete { path: String },

    /// The embedded dependency manifest failed to parse.
    #[error("Invalid dependency manifest: {message}")]
    ManifestParse { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SetupError {
    /// Process exit code for this error.
    ///
    /// A missing runtime always maps to 1. A failed child command propagates
    /// the child's own exit code when the OS reported one.
    pub fn exit_code(&self) -> u8 {
        match self {
            SetupError::CommandFailed { code: Some(c), .. } => {
                u8::try_from(*c).unwrap_or(1).max(1)
            }
            _ => 1,
        }
    }
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
