//! Error types for the pipeguard validation library.
//!
//! This module provides the error handling strategy using `thiserror` for
//! automatic error trait implementations. All errors raised by pipeguard
//! are represented by the [`CheckError`] enum.

use thiserror::Error;

/// The main error type for the pipeguard library.
///
/// Validation failures carry the name of the check that raised them, so
/// callers can dispatch on the failure cause without inspecting message
/// text:
///
/// ```rust,ignore
/// match frame.pipe(&verify(is_uniq(["id"])?)).await {
///     Err(CheckError::Failed { check_name, .. })
///         if check_name.as_deref() == Some("is_uniq") =>
///     {
///         // custom recovery for duplicate keys
///     }
///     other => { /* ... */ }
/// }
/// ```
#[derive(Error, Debug)]
pub enum CheckError {
    /// A validation check failed against the data.
    #[error("{message}")]
    Failed {
        /// Human-readable failure message, including the failing row count.
        message: String,
        /// Name of the check that failed (e.g. "verify", "is_uniq").
        check_name: Option<String>,
    },

    /// `verify()` received a value that is neither a boolean expression nor
    /// a predicate. Raised when the check is applied, not when it is built.
    #[error("verify() expects a boolean expression or a predicate, got {type_name}")]
    InvalidCheck {
        /// Type name of the rejected value.
        type_name: String,
    },

    /// A check was constructed with invalid arguments.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error from DataFusion plan construction or execution.
    #[error("DataFusion error: {0}")]
    DataFusion(#[from] datafusion::error::DataFusionError),

    /// Error from Arrow operations.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Generic internal error for unexpected conditions.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A type alias for `Result<T, CheckError>`.
///
/// This is the standard `Result` type used throughout the pipeguard
/// library.
pub type Result<T> = std::result::Result<T, CheckError>;

impl CheckError {
    /// Creates a validation failure for the named check.
    pub fn failed(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            check_name: Some(check_name.into()),
        }
    }

    /// Creates a validation failure with no check name, for callers
    /// constructing failures directly.
    pub fn failed_anonymous(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            check_name: None,
        }
    }

    /// Returns the name of the failed check, if this is a validation
    /// failure raised by a named check.
    pub fn check_name(&self) -> Option<&str> {
        match self {
            Self::Failed { check_name, .. } => check_name.as_deref(),
            _ => None,
        }
    }

    /// Returns true if this error is a validation failure, as opposed to a
    /// usage or engine error.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
