//! Failure taxonomy for remote data sources.

use thiserror::Error;

/// Why a remote source produced no usable data.
///
/// The resolver treats every variant the same way (fall back); the
/// distinction only matters for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Connection refused, DNS failure, timeout and the like.
    #[error("transport error: {0}")]
    Transport(String),

    /// The upstream answered with a non-2xx status.
    #[error("upstream responded with status {status}")]
    Status { status: u16 },

    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The response was well formed but held no records.
    #[error("upstream returned no data")]
    Empty,
}

impl SourceError {
    /// Short label for metrics and log fields.
    pub fn label(&self) -> &'static str {
        match self {
            SourceError::Transport(_) => "transport",
            SourceError::Status { .. } => "status",
            SourceError::Decode(_) => "decode",
            SourceError::Empty => "empty",
        }
    }
}

/// Result type for source calls.
pub type SourceResult<T> = Result<T, SourceError>;
