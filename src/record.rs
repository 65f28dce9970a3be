//! Serializable snapshot of an [`IslError`] and its cause chain.
//!
//! Causes are arbitrary error values, so only their rendered text survives
//! serialization. Rebuilding an error from a record yields the same kind,
//! message and `caused by:` lines as the original.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{report::CAUSED_BY, ErrorKind, IslError};

/// Plain-data form of an [`IslError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub kind: ErrorKind,
    pub message: String,
    /// Rendered causes, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl ErrorRecord {
    /// Renders the record exactly as [`IslError::report`] renders the error
    /// it was taken from.
    pub fn render(&self) -> String {
        let mut out = self.message.clone();
        for cause in &self.causes {
            out.push('\n');
            out.push_str(CAUSED_BY);
            out.push_str(cause);
        }
        out
    }
}

/// Cause link restored from its rendered text.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct RecordedCause {
    message: String,
    #[source]
    source: Option<Box<RecordedCause>>,
}

impl RecordedCause {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IslError {
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord {
            kind: self.kind(),
            message: self.message().to_owned(),
            causes: self.chain().skip(1).map(|cause| cause.to_string()).collect(),
        }
    }
}

impl From<&IslError> for ErrorRecord {
    fn from(err: &IslError) -> Self {
        err.to_record()
    }
}

impl From<ErrorRecord> for IslError {
    fn from(record: ErrorRecord) -> Self {
        let cause = record
            .causes
            .into_iter()
            .rev()
            .fold(None, |source: Option<Box<RecordedCause>>, message| {
                Some(Box::new(RecordedCause { message, source }))
            });
        match cause {
            Some(cause) => IslError::with_shared_cause(record.kind, record.message, Arc::new(*cause)),
            None => match record.kind {
                ErrorKind::InvalidArgument => IslError::invalid_argument(record.message),
                ErrorKind::Native => IslError::native(record.message),
            },
        }
    }
}

impl Serialize for IslError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IslError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        ErrorRecord::deserialize(deserializer).map(IslError::from)
    }
}
