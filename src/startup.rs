//! Wiring a session from configuration.
//!
//! Loads the account, opens the file store and builds the HTTP stream client,
//! so `main` only has to start, wait and stop.

use std::sync::Arc;

use tracing::info;

use crate::account::AccountManager;
use crate::adapters::ReqwestStreamClient;
use crate::config::StreamConfig;
use crate::error::RobirdResult;
use crate::session::StreamSession;
use crate::store::JsonFileStore;

/// Spawn an idle session for the account and store named by `config`.
pub async fn launch(config: &StreamConfig) -> RobirdResult<StreamSession> {
    let account = AccountManager::with_path(&config.account_path).load()?;
    info!(
        "Loaded account @{} from {}",
        account.screen_name(),
        config.account_path.display()
    );

    let store = Arc::new(JsonFileStore::open(&config.store_path).await?);
    let client = Arc::new(ReqwestStreamClient::new(config.stream_url.clone()));

    Ok(StreamSession::spawn(
        Arc::new(account),
        client,
        store,
        config.event_buffer,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, RobirdError, StoreError};
    use crate::models::{Account, AuthIdentity};
    use crate::session::SessionState;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> StreamConfig {
        StreamConfig::new()
            .with_stream_url("http://127.0.0.1:9/user.json")
            .with_account_path(dir.path().join("account.json"))
            .with_store_path(dir.path().join("store.json"))
    }

    fn save_account(config: &StreamConfig) {
        AccountManager::with_path(&config.account_path)
            .save(&Account::new(1, 42, "robird", AuthIdentity::new("token")))
            .unwrap();
    }

    #[tokio::test]
    async fn test_launch_without_account() {
        let dir = TempDir::new().unwrap();
        let result = launch(&config_in(&dir)).await;
        assert!(matches!(
            result,
            Err(RobirdError::Config(ConfigError::AccountNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_launch_with_corrupt_store() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        save_account(&config);
        std::fs::write(&config.store_path, "{not json").unwrap();

        let err = launch(&config).await.err().unwrap();
        assert!(matches!(err, RobirdError::Store(StoreError::Serialization(_))));
        assert_eq!(err.error_code(), "E_STORE_SERDE");
    }

    #[tokio::test]
    async fn test_launch_spawns_idle_session() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        save_account(&config);

        let session = launch(&config).await.unwrap();
        assert_eq!(*session.state().borrow(), SessionState::Idle);

        session.stop();
        let stats = session.join().await;
        assert_eq!(stats.handled, 0);
    }
}
