//! Error types for sqlfrag

use thiserror::Error;

/// Result type alias for fragment rendering.
pub type FragResult<T> = Result<T, FragError>;

/// Errors surfaced while rendering a fragment tree.
///
/// Rendering stops at the first failure; whatever was already written to the
/// sinks stays there.
#[derive(Debug, Error)]
pub enum FragError {
    /// The SQL sink accepted fewer bytes than it was given.
    #[error("Short write: expected {expected} bytes, wrote {written}")]
    ShortWrite { expected: usize, written: usize },

    /// I/O error reported by an `io::Write` backed sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting error reported by a `fmt::Write` backed sink.
    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Error reported by a caller supplied sink.
    #[error("Sink error: {0}")]
    Sink(String),

    /// An argument value could not be converted.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl FragError {
    /// Create a short write error.
    pub fn short_write(expected: usize, written: usize) -> Self {
        Self::ShortWrite { expected, written }
    }

    /// Create a sink error.
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink(message.into())
    }

    /// Check if this is a short write error
    pub fn is_short_write(&self) -> bool {
        matches!(self, Self::ShortWrite { .. })
    }

    /// Check if this error came from the sink itself
    pub fn is_sink(&self) -> bool {
        matches!(self, Self::Sink(_) | Self::Io(_) | Self::Fmt(_))
    }
}

impl From<serde_json::Error> for FragError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
