//! Streaming-related error types.
//!
//! Errors raised while opening the user stream, reading it, or decoding
//! individual stream messages.

use thiserror::Error;

/// Stream-specific error variants.
///
/// Every variant here is delivered to the session as a stream exception:
/// it is logged and processing continues with the next event.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StreamError {
    /// Could not reach the streaming endpoint.
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    /// The streaming endpoint answered with a non-success status.
    #[error("Stream rejected with HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The connection broke while reading the body.
    #[error("Stream transport error: {message}")]
    Transport { message: String },

    /// A stream line was not valid JSON.
    #[error("Invalid JSON in stream message: {message}")]
    InvalidJson { message: String },

    /// A stream line was not valid UTF-8.
    #[error("Invalid UTF-8 in stream message: {message}")]
    InvalidEncoding { message: String },

    /// A stream line grew past the decoder's limit without a newline.
    #[error("Stream message longer than {limit} bytes")]
    LineTooLong { limit: usize },

    /// A stream line was JSON but matched no known message shape.
    #[error("Unknown stream message: {preview}")]
    UnknownMessage { preview: String },

    /// The server ended the stream.
    #[error("Stream closed by server")]
    Closed,
}

impl StreamError {
    /// Short error code for structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::ConnectionFailed { .. } => "E_STREAM_CONN",
            StreamError::HttpStatus { .. } => "E_STREAM_HTTP",
            StreamError::Transport { .. } => "E_STREAM_TRANSPORT",
            StreamError::InvalidJson { .. } => "E_STREAM_JSON",
            StreamError::InvalidEncoding { .. } => "E_STREAM_UTF8",
            StreamError::LineTooLong { .. } => "E_STREAM_LINE",
            StreamError::UnknownMessage { .. } => "E_STREAM_UNKNOWN",
            StreamError::Closed => "E_STREAM_CLOSED",
        }
    }

    /// Whether the error came from decoding a single message rather than the
    /// connection itself.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            StreamError::InvalidJson { .. }
                | StreamError::InvalidEncoding { .. }
                | StreamError::LineTooLong { .. }
                | StreamError::UnknownMessage { .. }
        )
    }

    /// Whether the service asked us to back off (420/429).
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, StreamError::HttpStatus { status, .. } if *status == 420 || *status == 429)
    }
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::InvalidJson {
            message: err.to_string(),
        }
    }
}
