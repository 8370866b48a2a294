//! Custom error types for scaffolding operations

use thiserror::Error;

/// Main error type for oidc-starter operations
///
/// Every caught error terminates the run with exit code 1; the variants
/// exist to keep the failure class visible in the message and at the call
/// sites that construct them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScaffoldError {
    /// Validation Error - invalid project name, URL field, or template URL
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Fetch Error - template clone was rejected or failed
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// Substitution Error - token rewriting failed mid-pass
    #[error("Substitution error: {message}")]
    Substitution { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },

    /// Command Error - external command failed
    #[error("Command error: {message}")]
    Command { message: String },
}

impl ScaffoldError {
    /// Create a validation error
    #[inline]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a fetch error
    #[inline]
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a substitution error
    #[inline]
    pub fn substitution<S: Into<String>>(message: S) -> Self {
        Self::Substitution {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }

    /// Create a command error
    #[inline]
    pub fn command<S: Into<String>>(message: S) -> Self {
        Self::Command {
            message: message.into(),
        }
    }
}
