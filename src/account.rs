//! Account file storage.
//!
//! The account the stream runs for lives in `~/.robird/account.json`:
//!
//! ```json
//! {"id": 1, "user_id": 42, "screen_name": "me", "access_token": "..."}
//! ```

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::{ACCOUNT_FILE, CONFIG_DIR};
use crate::error::ConfigError;
use crate::models::Account;

/// Loads and saves the account file.
#[derive(Debug, Clone)]
pub struct AccountManager {
    account_path: PathBuf,
}

impl AccountManager {
    /// Manager for the default location under the home directory.
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(Self::with_path(home.join(CONFIG_DIR).join(ACCOUNT_FILE)))
    }

    /// Manager for an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            account_path: path.into(),
        }
    }

    pub fn account_path(&self) -> &Path {
        &self.account_path
    }

    pub fn exists(&self) -> bool {
        self.account_path.exists()
    }

    /// Read the account file.
    pub fn load(&self) -> Result<Account, ConfigError> {
        let file = File::open(&self.account_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::AccountNotFound {
                path: self.account_path.clone(),
            },
            _ => ConfigError::AccountUnreadable {
                path: self.account_path.clone(),
                source: e,
            },
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| ConfigError::AccountInvalid {
            path: self.account_path.clone(),
            source: e,
        })
    }

    /// Write the account file, creating the parent directory if needed.
    pub fn save(&self, account: &Account) -> Result<(), ConfigError> {
        let unwritable = |source| ConfigError::AccountUnwritable {
            path: self.account_path.clone(),
            source,
        };

        if let Some(parent) = self.account_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(unwritable)?;
            }
        }

        let file = File::create(&self.account_path).map_err(unwritable)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, account).map_err(|e| {
            ConfigError::AccountInvalid {
                path: self.account_path.clone(),
                source: e,
            }
        })?;
        writer.flush().map_err(unwritable)
    }
}
