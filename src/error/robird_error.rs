//! Unified error type for robird.

use thiserror::Error;

use super::config::ConfigError;
use super::store::StoreError;
use super::stream::StreamError;

/// Unified error type consolidating the domain errors.
#[derive(Debug, Error)]
pub enum RobirdError {
    /// Stream connection or decoding error.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// Local store error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration or account error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RobirdError {
    /// Short error code for structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            RobirdError::Stream(err) => err.error_code(),
            RobirdError::Store(err) => err.error_code(),
            RobirdError::Config(_) => "E_CONFIG",
        }
    }
}

/// Type alias for Results using [`RobirdError`].
pub type RobirdResult<T> = Result<T, RobirdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_keep_codes() {
        let err: RobirdError = StreamError::Closed.into();
        assert_eq!(err.error_code(), "E_STREAM_CLOSED");

        let err: RobirdError = StoreError::MissingColumn {
            collection: "tweets",
            column: "tweet_id",
        }
        .into();
        assert_eq!(err.error_code(), "E_STORE_COLUMN");

        let err: RobirdError = ConfigError::NoHomeDirectory.into();
        assert_eq!(err.error_code(), "E_CONFIG");
    }

    #[test]
    fn test_transparent_display() {
        let err: RobirdError = StreamError::Closed.into();
        assert_eq!(err.to_string(), "Stream closed by server");
    }

    #[test]
    fn test_question_mark_propagation() {
        fn open() -> RobirdResult<()> {
            Err(StoreError::io(
                "/tmp/robird/store.json",
                std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            ))?;
            Ok(())
        }

        assert!(matches!(open(), Err(RobirdError::Store(StoreError::Io { .. }))));
    }
}
