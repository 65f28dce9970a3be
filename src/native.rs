//! Error codes reported by the native ISL context and their mapping onto
//! [`IslError`].

use thiserror::Error;

use crate::error::{ErrorKind, IslError};

/// Message used when the native library cannot allocate a fresh context.
pub const CONTEXT_ALLOC_FAILED: &str = "Failed to allocate ISL context";

/// Message used when set text cannot be copied out of the caller's string.
pub const SET_TEXT_UNREADABLE: &str = "Failed to read set text";

/// Error code last recorded on a native ISL context (`enum isl_error`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeErrorCode {
    #[error("No ISL error reported")]
    None,

    #[error("ISL aborted due to a fatal error")]
    Abort,

    #[error("ISL allocation failed")]
    Alloc,

    #[error("ISL reported an unknown error")]
    Unknown,

    #[error("ISL reported an internal error")]
    Internal,

    #[error("ISL reported an invalid input")]
    Invalid,

    #[error("ISL exceeded a resource quota")]
    Quota,

    #[error("ISL reported an integer overflow")]
    Overflow,

    /// A raw value outside the codes this crate knows about.
    #[error("ISL reported an unspecified error")]
    Unspecified(i32),
}

impl NativeErrorCode {
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::Abort,
            2 => Self::Alloc,
            3 => Self::Unknown,
            4 => Self::Internal,
            5 => Self::Invalid,
            6 => Self::Quota,
            7 => Self::Overflow,
            other => Self::Unspecified(other),
        }
    }

    pub const fn raw(&self) -> i32 {
        match self {
            Self::None => 0,
            Self::Abort => 1,
            Self::Alloc => 2,
            Self::Unknown => 3,
            Self::Internal => 4,
            Self::Invalid => 5,
            Self::Quota => 6,
            Self::Overflow => 7,
            Self::Unspecified(raw) => *raw,
        }
    }

    /// Kind of [`IslError`] this code is surfaced as.
    ///
    /// Only `Invalid` blames the caller's input; every other code is a
    /// failure of the native library itself.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Invalid => ErrorKind::InvalidArgument,
            _ => ErrorKind::Native,
        }
    }
}

impl From<i32> for NativeErrorCode {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

/// Turns a native error code into the error surfaced to callers.
///
/// The returned error carries the code's message and no cause.
pub fn classify(code: NativeErrorCode) -> IslError {
    let kind = code.kind();
    tracing::debug!(code = code.raw(), %kind, "classifying native error code");
    match kind {
        ErrorKind::InvalidArgument => IslError::invalid_argument(code.to_string()),
        ErrorKind::Native => IslError::native(code.to_string()),
    }
}

impl From<NativeErrorCode> for IslError {
    fn from(code: NativeErrorCode) -> Self {
        classify(code)
    }
}
