//! Opaque handles to objects owned by the native ISL library.
//!
//! Handles cross the binding boundary as plain 64-bit integers. A zero
//! value never names a live object, so conversion from the raw integer is
//! the point where it is rejected.

use std::fmt::Display;
use std::hash::Hash;
use std::marker::PhantomData;
use std::num::NonZeroI64;

use crate::error::{IslError, Result};
use crate::native::CONTEXT_ALLOC_FAILED;

/// Marker for the native object type a [`Handle`] points at.
pub trait HandleKind: Copy + Eq + Hash + std::fmt::Debug {
    /// Capitalised name used in diagnostics, e.g. `"Context"`.
    const NAME: &'static str;
}

/// Marker for `isl_ctx` handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context;

impl HandleKind for Context {
    const NAME: &'static str = "Context";
}

/// Marker for `isl_set` handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Set;

impl HandleKind for Set {
    const NAME: &'static str = "Set";
}

/// Non-zero raw handle tagged with the kind of object it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle<K: HandleKind> {
    raw: NonZeroI64,
    _kind: PhantomData<K>,
}

pub type ContextHandle = Handle<Context>;
pub type SetHandle = Handle<Set>;

impl<K: HandleKind> Handle<K> {
    /// Validates a raw handle received from the caller.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error reading `"<Kind> handle must not
    /// be 0"` when `raw` is zero.
    pub fn from_raw(raw: i64) -> Result<Self> {
        match NonZeroI64::new(raw) {
            Some(raw) => Ok(Self {
                raw,
                _kind: PhantomData,
            }),
            None => {
                let err = IslError::invalid_argument(format!("{} handle must not be 0", K::NAME));
                tracing::debug!(kind = %err.kind(), reason = err.message(), "rejected handle");
                Err(err)
            }
        }
    }

    /// Raw integer passed back across the binding boundary.
    pub const fn raw(&self) -> i64 {
        self.raw.get()
    }
}

impl Handle<Context> {
    /// Wraps the value returned by the native context allocator.
    ///
    /// # Errors
    ///
    /// A zero value means allocation failed and yields a native error
    /// "Failed to allocate ISL context".
    pub fn from_allocated(raw: i64) -> Result<Self> {
        match NonZeroI64::new(raw) {
            Some(raw) => Ok(Self {
                raw,
                _kind: PhantomData,
            }),
            None => {
                tracing::debug!(reason = CONTEXT_ALLOC_FAILED, "context allocation failed");
                Err(IslError::native(CONTEXT_ALLOC_FAILED))
            }
        }
    }
}

impl<K: HandleKind> TryFrom<i64> for Handle<K> {
    type Error = IslError;

    fn try_from(raw: i64) -> Result<Self> {
        Self::from_raw(raw)
    }
}

impl<K: HandleKind> From<Handle<K>> for i64 {
    fn from(handle: Handle<K>) -> Self {
        handle.raw()
    }
}

impl<K: HandleKind> Display for Handle<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{:#x}", K::NAME, self.raw.get())
    }
}

// =============================================================================
// Handle Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: HandleKind> serde::Serialize for Handle<K> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.raw())
    }
}

#[cfg(feature = "serde")]
impl<'de, K: HandleKind> serde::Deserialize<'de> for Handle<K> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}
