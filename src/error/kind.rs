//! Error kinds recognised by the binding layer.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag distinguishing the kinds of [`IslError`](super::IslError).
///
/// | Kind              | Raised when                                          |
/// |-------------------|------------------------------------------------------|
/// | `InvalidArgument` | A caller-supplied argument violates a precondition   |
/// | `Native`          | The native library failed for reasons of its own     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// The caller passed an argument that violates a documented precondition.
    InvalidArgument,

    /// The native library reported a failure not attributable to the caller.
    Native,
}

impl ErrorKind {
    /// Stable snake_case name, as used in serialized errors.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Native => "native",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
