//! The error type shared by every fallible operation of the binding.
//!
//! All failures are carried by a single [`IslError`] value: a kind tag, a
//! human-readable message and an optional cause. Callers match on
//! [`IslError::kind`] to decide whether to recover, and walk
//! [`IslError::chain`] (or print [`IslError::report`]) for diagnosis.

pub mod kind;
pub mod report;

#[cfg(test)]
mod tests;

use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;

pub use kind::ErrorKind;
pub use report::{Chain, Report};

/// Shared, thread-safe handle to the error that triggered an [`IslError`].
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IslError>;

/// Error raised by the binding layer.
///
/// Immutable once built. Cloning is cheap and shares the cause, so every
/// clone reports the very same underlying error.
#[derive(Debug, Clone)]
pub struct IslError {
    kind: ErrorKind,
    message: String,
    cause: Option<Cause>,
}

impl IslError {
    fn new(kind: ErrorKind, message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause,
        }
    }

    /// Creates an invalid-argument error with no recorded cause.
    ///
    /// The message is stored as given; an empty message is accepted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use isl_core::{ErrorKind, IslError};
    ///
    /// let err = IslError::invalid_argument("dimension must be non-negative");
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(err.message(), "dimension must be non-negative");
    /// assert!(err.cause().is_none());
    /// ```
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message, None)
    }

    /// Creates an invalid-argument error that records `cause` as the error
    /// that triggered it.
    ///
    /// The cause is moved into the error untouched and is returned verbatim
    /// by [`cause`](Self::cause) and [`Error::source`].
    pub fn invalid_argument_with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new(ErrorKind::InvalidArgument, message, Some(Arc::new(cause)))
    }

    /// Creates a native-library error with no recorded cause.
    pub fn native(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Native, message, None)
    }

    /// Creates a native-library error caused by `cause`.
    pub fn native_with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new(ErrorKind::Native, message, Some(Arc::new(cause)))
    }

    /// Builds an error of `kind` around an already shared cause.
    ///
    /// The `Arc` itself is stored, so `Arc::ptr_eq` against the caller's
    /// handle holds for the returned error.
    pub fn with_shared_cause(kind: ErrorKind, message: impl Into<String>, cause: Cause) -> Self {
        Self::new(kind, message, Some(cause))
    }

    /// Kind tag used to tell this error apart from its siblings.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable description, exactly as given at construction.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error that triggered this one, if any.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// True for errors blaming a caller-supplied argument.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// True for failures of the native library itself.
    pub const fn is_native(&self) -> bool {
        matches!(self.kind, ErrorKind::Native)
    }

    /// Iterates over this error followed by every error in its cause chain.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Returns a value whose `Display` renders the message followed by one
    /// `caused by:` line per link in the cause chain.
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}

impl Display for IslError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for IslError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause as &(dyn Error + 'static)),
            None => None,
        }
    }
}
