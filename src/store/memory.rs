use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::contract::{Collection, RowId};
use super::predicate::Predicate;
use super::value::Row;
use crate::error::StoreError;
use crate::traits::LocalStore;

/// Rows of one collection, keyed by their insertion id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    next_id: u64,
    rows: BTreeMap<u64, Row>,
}

impl Table {
    fn insert(&mut self, row: Row) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.rows.insert(id, row);
        id
    }

    fn update(&mut self, changes: &Row, predicate: &Predicate) -> usize {
        let mut updated = 0;
        for row in self.rows.values_mut().filter(|row| predicate.matches(row)) {
            row.apply(changes);
            updated += 1;
        }
        updated
    }

    fn delete(&mut self, predicate: &Predicate) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| !predicate.matches(row));
        before - self.rows.len()
    }

    fn query(&self, predicate: &Predicate) -> Vec<Row> {
        self.rows
            .values()
            .filter(|row| predicate.matches(row))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every collection of a store.
pub type Tables = BTreeMap<Collection, Table>;

fn check_required(collection: Collection, row: &Row) -> Result<(), StoreError> {
    match collection
        .required_columns()
        .iter()
        .find(|column| !row.contains(column))
    {
        Some(column) => Err(StoreError::MissingColumn {
            collection: collection.name(),
            column: *column,
        }),
        None => Ok(()),
    }
}

/// In-process store backed by ordered maps.
///
/// Used directly in tests and as the working set of
/// [`JsonFileStore`](super::JsonFileStore).
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Copy of the current contents.
    pub async fn snapshot(&self) -> Tables {
        self.tables.read().await.clone()
    }

    /// Swap in a new set of tables.
    pub(crate) async fn replace(&self, tables: Tables) {
        *self.tables.write().await = tables;
    }

    /// Number of rows in `collection`.
    pub async fn len(&self, collection: Collection) -> usize {
        self.tables
            .read()
            .await
            .get(&collection)
            .map_or(0, Table::len)
    }
}

/// Insert `row` into `collection` of `tables`, assigning the next row id.
pub(crate) fn insert_row(
    tables: &mut Tables,
    collection: Collection,
    row: Row,
) -> Result<RowId, StoreError> {
    check_required(collection, &row)?;
    let id = tables.entry(collection).or_default().insert(row);
    Ok(RowId { collection, id })
}

pub(crate) fn update_rows(
    tables: &mut Tables,
    collection: Collection,
    changes: &Row,
    predicate: &Predicate,
) -> usize {
    tables
        .get_mut(&collection)
        .map_or(0, |table| table.update(changes, predicate))
}

pub(crate) fn delete_rows(
    tables: &mut Tables,
    collection: Collection,
    predicate: &Predicate,
) -> usize {
    tables
        .get_mut(&collection)
        .map_or(0, |table| table.delete(predicate))
}

#[async_trait]
impl LocalStore for MemoryStore {
    async fn insert(&self, collection: Collection, row: Row) -> Result<RowId, StoreError> {
        insert_row(&mut *self.tables.write().await, collection, row)
    }

    async fn update(
        &self,
        collection: Collection,
        changes: Row,
        predicate: &Predicate,
    ) -> Result<usize, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(update_rows(&mut tables, collection, &changes, predicate))
    }

    async fn delete(
        &self,
        collection: Collection,
        predicate: &Predicate,
    ) -> Result<usize, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(delete_rows(&mut tables, collection, predicate))
    }

    async fn query(
        &self,
        collection: Collection,
        predicate: &Predicate,
    ) -> Result<Vec<Row>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(&collection)
            .map(|table| table.query(predicate))
            .unwrap_or_default())
    }
}
