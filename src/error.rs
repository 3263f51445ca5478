//! Error types for bazelwrap
//!
//! All modules use `WrapResult<T>` as their return type.

use thiserror::Error;

/// Result type alias for wrapper operations
pub type WrapResult<T> = Result<T, WrapError>;

/// All errors that can occur in the wrapper
#[derive(Error, Debug)]
pub enum WrapError {
    // Environment errors
    #[error("BAZEL_REAL is not set, cannot locate the real bazel binary")]
    RealBazelNotSet,

    #[error("Failed to query OS version: {0}")]
    OsVersion(String),

    #[error("Failed to run toolchain version query: {command}")]
    ToolchainQuery {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Failed to start {command}")]
    DelegateSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Bazel was terminated by a signal")]
    DelegateSignaled,
}

impl WrapError {
    /// Create a toolchain query error
    pub fn toolchain_query(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::ToolchainQuery {
            command: command.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::RealBazelNotSet => {
                Some("This wrapper is meant to be launched by bazelisk as tools/bazel")
            }
            Self::ToolchainQuery { .. } => {
                Some("Install the Xcode command line tools: xcode-select --install")
            }
            _ => None,
        }
    }
}
