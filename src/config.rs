//! Runtime configuration.
//!
//! Defaults resolve under `~/.robird`; every field can be overridden from the
//! environment or, for paths, from the command line.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::session::DEFAULT_EVENT_BUFFER;

/// Directory under the home directory holding robird's files.
pub const CONFIG_DIR: &str = ".robird";
pub const ACCOUNT_FILE: &str = "account.json";
pub const STORE_FILE: &str = "store.json";

pub const DEFAULT_STREAM_URL: &str = "https://userstream.twitter.com/1.1/user.json";

pub const ENV_STREAM_URL: &str = "ROBIRD_STREAM_URL";
pub const ENV_ACCOUNT: &str = "ROBIRD_ACCOUNT";
pub const ENV_STORE: &str = "ROBIRD_STORE";
pub const ENV_EVENT_BUFFER: &str = "ROBIRD_EVENT_BUFFER";

/// `~/.robird`, or `.robird` in the working directory when there is no home.
pub fn default_base_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR))
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIR))
}

/// Configuration for a streaming run.
///
/// Use the builder pattern to customize.
///
/// # Example
///
/// ```ignore
/// use robird::config::StreamConfig;
///
/// let config = StreamConfig::from_env()?
///     .with_store_path("/tmp/robird.json")
///     .with_event_buffer(64);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StreamConfig {
    /// User-stream endpoint.
    pub stream_url: String,
    /// JSON file holding the account and its token.
    pub account_path: PathBuf,
    /// JSON snapshot backing the local store.
    pub store_path: PathBuf,
    /// Capacity of the channel between stream client and session worker.
    pub event_buffer: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        let base = default_base_dir();
        Self {
            stream_url: DEFAULT_STREAM_URL.to_string(),
            account_path: base.join(ACCOUNT_FILE),
            store_path: base.join(STORE_FILE),
            event_buffer: DEFAULT_EVENT_BUFFER,
        }
    }
}

impl StreamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stream_url(mut self, url: impl Into<String>) -> Self {
        self.stream_url = url.into();
        self
    }

    pub fn with_account_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.account_path = path.into();
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_event_buffer(mut self, capacity: usize) -> Self {
        self.event_buffer = capacity;
        self
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Build from explicit `(name, value)` pairs, ignoring unrelated names.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (name, value) in vars {
            let value = value.into();
            match name.as_ref() {
                ENV_STREAM_URL => config.stream_url = value,
                ENV_ACCOUNT => config.account_path = PathBuf::from(value),
                ENV_STORE => config.store_path = PathBuf::from(value),
                ENV_EVENT_BUFFER => {
                    config.event_buffer = match value.trim().parse::<usize>() {
                        Ok(capacity) if capacity > 0 => capacity,
                        _ => {
                            return Err(ConfigError::InvalidEnv {
                                var: ENV_EVENT_BUFFER,
                                value,
                            })
                        }
                    };
                }
                _ => {}
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StreamConfig::default();
        assert_eq!(config.stream_url, DEFAULT_STREAM_URL);
        assert_eq!(config.event_buffer, 256);
        assert!(config.account_path.ends_with(".robird/account.json"));
        assert!(config.store_path.ends_with(".robird/store.json"));
    }

    #[test]
    fn test_builder() {
        let config = StreamConfig::new()
            .with_stream_url("http://localhost:8080/stream")
            .with_store_path("/tmp/store.json")
            .with_account_path("/tmp/account.json")
            .with_event_buffer(8);
        assert_eq!(config.stream_url, "http://localhost:8080/stream");
        assert_eq!(config.store_path, PathBuf::from("/tmp/store.json"));
        assert_eq!(config.account_path, PathBuf::from("/tmp/account.json"));
        assert_eq!(config.event_buffer, 8);
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = StreamConfig::from_vars([
            ("ROBIRD_STREAM_URL", "http://example.test/user.json"),
            ("ROBIRD_STORE", "/data/store.json"),
            ("ROBIRD_EVENT_BUFFER", "32"),
            ("PATH", "/usr/bin"),
        ])
        .unwrap();
        assert_eq!(config.stream_url, "http://example.test/user.json");
        assert_eq!(config.store_path, PathBuf::from("/data/store.json"));
        assert_eq!(config.event_buffer, 32);
        assert_eq!(config.account_path, StreamConfig::default().account_path);
    }

    #[test]
    fn test_from_vars_rejects_bad_buffer() {
        for bad in ["lots", "0", "-1"] {
            let err = StreamConfig::from_vars([("ROBIRD_EVENT_BUFFER", bad)]).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidEnv {
                    var: "ROBIRD_EVENT_BUFFER",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_from_vars_empty_is_default() {
        let vars: Vec<(String, String)> = Vec::new();
        assert_eq!(StreamConfig::from_vars(vars).unwrap(), StreamConfig::default());
    }
}
