//! isl-core - error model and argument checks for an ISL (Integer Set
//! Library) binding.
//!
//! Every fallible operation of the binding reports an [`IslError`]. The error
//! carries an [`ErrorKind`] so callers can tell a rejected argument apart
//! from a failure of the native library, plus an optional cause chain.
//!
//! ```rust
//! use isl_core::{ContextHandle, ErrorKind, SetText};
//!
//! let err = ContextHandle::from_raw(0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! assert_eq!(err.message(), "Context handle must not be 0");
//!
//! let err = SetText::new(Some("")).unwrap_err();
//! assert_eq!(err.to_string(), "Set text must not be empty");
//! ```
//!
//! # Features
//!
//! - `serde`: serialization of errors (as [`ErrorRecord`]) and handles.

pub mod error;
pub mod handle;
pub mod native;
#[cfg(feature = "serde")]
pub mod record;
pub mod set_text;

pub use error::{Cause, ErrorKind, IslError, Result};
pub use handle::{ContextHandle, Handle, HandleKind, SetHandle};
pub use native::{classify, NativeErrorCode};
#[cfg(feature = "serde")]
pub use record::ErrorRecord;
pub use set_text::{read_from_args, SetText};
