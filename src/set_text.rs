//! Textual set expressions handed to the native parser.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{IslError, Result};
use crate::handle::ContextHandle;
use crate::native::SET_TEXT_UNREADABLE;

pub const SET_TEXT_NULL: &str = "Set text must not be null";
pub const SET_TEXT_EMPTY: &str = "Set text must not be empty";

/// Set expression text that is known to be present and non-empty.
///
/// Only the preconditions of the binding are checked here; whether the text
/// is a well-formed ISL set is decided by the native parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetText(String);

impl SetText {
    /// Validates optional text supplied by a caller.
    ///
    /// # Errors
    ///
    /// - `None` yields an invalid-argument error "Set text must not be null".
    /// - `Some("")` yields an invalid-argument error "Set text must not be empty".
    ///
    /// # Example
    ///
    /// ```rust
    /// use isl_core::SetText;
    ///
    /// let text = SetText::new(Some("{ [i] : 0 <= i < 10 }")).unwrap();
    /// assert_eq!(text.as_str(), "{ [i] : 0 <= i < 10 }");
    ///
    /// assert!(SetText::new(None).unwrap_err().is_invalid_argument());
    /// ```
    pub fn new(text: Option<&str>) -> Result<Self> {
        match text {
            None => Err(reject(SET_TEXT_NULL)),
            Some("") => Err(reject(SET_TEXT_EMPTY)),
            Some(text) => Ok(Self(text.to_owned())),
        }
    }

    /// The validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn reject(reason: &'static str) -> IslError {
    let err = IslError::invalid_argument(reason);
    tracing::debug!(kind = %err.kind(), reason, "rejected set text");
    err
}

/// Checks the arguments of a "read set from text" call.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. `context` is zero: invalid argument "Context handle must not be 0"
/// 2. `text` is missing: invalid argument "Set text must not be null"
/// 3. `text` is not UTF-8: native error "Failed to read set text", with the
///    decoding error as cause
/// 4. `text` is empty: invalid argument "Set text must not be empty"
pub fn read_from_args(context: i64, text: Option<&[u8]>) -> Result<(ContextHandle, SetText)> {
    let context = ContextHandle::from_raw(context)?;
    let bytes = text.ok_or_else(|| reject(SET_TEXT_NULL))?;
    let text = std::str::from_utf8(bytes).map_err(|e| {
        tracing::debug!(error = %e, "set text is not valid UTF-8");
        IslError::native_with_cause(SET_TEXT_UNREADABLE, e)
    })?;
    let text = SetText::new(Some(text))?;
    Ok((context, text))
}

impl TryFrom<&str> for SetText {
    type Error = IslError;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(Some(text))
    }
}

impl TryFrom<String> for SetText {
    type Error = IslError;

    fn try_from(text: String) -> Result<Self> {
        if text.is_empty() {
            return Err(reject(SET_TEXT_EMPTY));
        }
        Ok(Self(text))
    }
}

impl FromStr for SetText {
    type Err = IslError;

    fn from_str(text: &str) -> Result<Self> {
        Self::new(Some(text))
    }
}

impl AsRef<str> for SetText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for SetText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
