//! Configuration and account loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building [`crate::config::StreamConfig`] or loading the
/// account file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory to resolve default paths against.
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    /// The account file does not exist.
    #[error("Account file not found: {}", path.display())]
    AccountNotFound { path: PathBuf },

    /// The account file exists but could not be read.
    #[error("Failed to read account file {}: {source}", path.display())]
    AccountUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The account file could not be written.
    #[error("Failed to write account file {}: {source}", path.display())]
    AccountUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The account file is not valid JSON for an account.
    #[error("Invalid account file {}: {source}", path.display())]
    AccountInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    /// A command-line flag was given without its value.
    #[error("Missing value for {flag}")]
    MissingArgument { flag: String },
}
