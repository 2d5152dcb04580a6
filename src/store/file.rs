use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::contract::{Collection, RowId};
use super::memory::{delete_rows, insert_row, update_rows, MemoryStore, Tables};
use super::predicate::Predicate;
use super::value::Row;
use crate::error::StoreError;
use crate::traits::LocalStore;

/// Store that keeps its rows in memory and writes a JSON snapshot to disk
/// after every mutation that changed something.
///
/// A mutation is staged on a copy of the tables and only becomes visible
/// once its snapshot has been written. A failed write leaves both the file
/// and the in-memory contents as they were.
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
    // Held across stage + persist + swap so snapshots land in call order.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading the existing snapshot if there is one.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let tables = load_tables(&path).await?;
        debug!(
            "Opened store at {:?} ({} collections)",
            path,
            tables.len()
        );
        Ok(Self {
            path,
            inner: MemoryStore::from_tables(tables),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current contents.
    pub async fn snapshot(&self) -> Tables {
        self.inner.snapshot().await
    }

    /// Run `mutate` on a copy of the tables. When it reports a change, the
    /// copy is persisted and then replaces the live tables.
    async fn commit<T, F>(&self, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Tables) -> Result<(T, bool), StoreError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut staged = self.inner.snapshot().await;
        let (result, changed) = mutate(&mut staged)?;
        if changed {
            self.persist(&staged).await?;
            self.inner.replace(staged).await;
        }
        Ok(result)
    }

    /// Write `tables` next to the snapshot and rename it into place.
    async fn persist(&self, tables: &Tables) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tables)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let temp = temp_path(&self.path);
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| StoreError::io(&temp, e))?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
                warn!("Failed to remove {:?}: {}", temp, cleanup);
            }
            return Err(StoreError::io(&self.path, e));
        }
        Ok(())
    }
}

/// `store.json` -> `store.json.tmp`, in the same directory so the rename
/// stays on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("store"));
    name.push(".tmp");
    path.with_file_name(name)
}

async fn load_tables(path: &Path) -> Result<Tables, StoreError> {
    match tokio::fs::read_to_string(path).await {
        Ok(json) if json.trim().is_empty() => Ok(Tables::new()),
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Tables::new()),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

#[async_trait]
impl LocalStore for JsonFileStore {
    async fn insert(&self, collection: Collection, row: Row) -> Result<RowId, StoreError> {
        self.commit(|tables| Ok((insert_row(tables, collection, row)?, true)))
            .await
    }

    async fn update(
        &self,
        collection: Collection,
        changes: Row,
        predicate: &Predicate,
    ) -> Result<usize, StoreError> {
        self.commit(|tables| {
            let updated = update_rows(tables, collection, &changes, predicate);
            Ok((updated, updated > 0))
        })
        .await
    }

    async fn delete(
        &self,
        collection: Collection,
        predicate: &Predicate,
    ) -> Result<usize, StoreError> {
        self.commit(|tables| {
            let deleted = delete_rows(tables, collection, predicate);
            Ok((deleted, deleted > 0))
        })
        .await
    }

    async fn query(
        &self,
        collection: Collection,
        predicate: &Predicate,
    ) -> Result<Vec<Row>, StoreError> {
        self.inner.query(collection, predicate).await
    }
}
