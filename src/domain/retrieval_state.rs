//! Three-state result emitted by the retrieval pipeline.

use std::fmt;

/// Message used when a failure carries no description of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "Unknown Error";

/// Coarse classification of a retrieval failure.
///
/// Consumers that only care about the message can ignore this entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The cache store failed to read or write.
    Cache,
    /// The remote source failed (transport, auth, not found, bad payload).
    Network,
    /// The cache accepted a write but could not return the record afterwards.
    Consistency,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Network => "network",
            Self::Consistency => "consistency",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One item of the retrieval stream.
///
/// A stream always yields exactly one `Loading` followed by exactly one
/// terminal state (`Success` or `Error`), then ends.
#[derive(Debug, Clone, PartialEq)]
pub enum RetrievalState<T> {
    Loading,
    Success(T),
    Error { kind: FailureKind, message: String },
}

impl<T> RetrievalState<T> {
    /// Builds an error state, substituting [`DEFAULT_ERROR_MESSAGE`] for a blank message.
    pub fn error(kind: FailureKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self::Error { kind, message }
    }

    /// Returns true for `Success` and `Error`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::Error { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
