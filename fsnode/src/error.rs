//! Error types for the fsnode library.
//!
//! Filesystem failures are carried unmodified inside [`Error::Io`], so callers
//! can still match on [`std::io::ErrorKind`]. Content failures (malformed JSON)
//! are kept apart in [`Error::Json`].

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an fsnode error.
///
/// # Examples
///
/// ```
/// use fsnode::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fsnode library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error from the underlying filesystem primitive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File content could not be parsed or serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A path could not be turned into an absolute path.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A rename pattern failed to compile.
    #[error("invalid rename pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl Error {
    /// The [`ErrorKind`] of the wrapped I/O error, if this is one.
    #[must_use]
    pub fn io_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Io(err) => Some(err.kind()),
            _ => None,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsnode::Error;
    /// use std::io;
    ///
    /// let err = Error::from(io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(ErrorKind::NotFound)
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsnode::Error;
    /// use std::io;
    ///
    /// let err = Error::from(io::Error::from(io::ErrorKind::PermissionDenied));
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.io_kind() == Some(ErrorKind::PermissionDenied)
    }

    /// Check if error reports that a target path is already taken.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        self.io_kind() == Some(ErrorKind::AlreadyExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(display.contains("file not found"));
        assert!(err.is_not_found());
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(format!("{err}").contains("JSON error"));
        assert_eq!(err.io_kind(), None);
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "cannot resolve".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
        assert!(display.contains("cannot resolve"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "FSNODE_JSON_INDENT".to_string(),
            message: "must be a non-negative integer".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("FSNODE_JSON_INDENT"));
    }

    #[test]
    fn test_already_exists_classification() {
        let err = Error::from(std::io::Error::from(ErrorKind::AlreadyExists));
        assert!(err.is_already_exists());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_pattern_conversion() {
        let err: Error = regex::Regex::new("(").unwrap_err().into();
        assert!(format!("{err}").contains("invalid rename pattern"));
    }
}
