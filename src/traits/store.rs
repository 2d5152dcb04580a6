//! Local store trait abstraction.
//!
//! The reconciler only talks to the cache through this trait, so the
//! in-memory store, the JSON file store, and test doubles are
//! interchangeable.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::store::{Collection, Predicate, Row, RowId};

/// Trait for the local tweet and direct-message cache.
///
/// Each call is atomic with respect to other calls on the same store.
/// A predicate that matches nothing is not an error: `update` and
/// `delete` report zero affected rows.
///
/// # Example
///
/// ```ignore
/// use robird::store::{Collection, Predicate};
/// use robird::traits::LocalStore;
///
/// async fn purge<S: LocalStore>(store: &S, tweet_id: i64) -> Result<usize, StoreError> {
///     store
///         .delete(Collection::Tweets, &Predicate::all().eq("tweet_id", tweet_id))
///         .await
/// }
/// ```
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Insert a row and return its identifier.
    ///
    /// Fails with [`StoreError::MissingColumn`] when the row lacks one of the
    /// collection's required columns. Duplicates are allowed.
    async fn insert(&self, collection: Collection, row: Row) -> Result<RowId, StoreError>;

    /// Overwrite `changes` on every row matching `predicate`.
    ///
    /// # Returns
    /// The number of rows updated.
    async fn update(
        &self,
        collection: Collection,
        changes: Row,
        predicate: &Predicate,
    ) -> Result<usize, StoreError>;

    /// Remove every row matching `predicate`.
    ///
    /// # Returns
    /// The number of rows removed.
    async fn delete(&self, collection: Collection, predicate: &Predicate)
        -> Result<usize, StoreError>;

    /// Return copies of every row matching `predicate`, in insertion order.
    async fn query(&self, collection: Collection, predicate: &Predicate)
        -> Result<Vec<Row>, StoreError>;

    /// Number of rows matching `predicate`.
    async fn count(&self, collection: Collection, predicate: &Predicate)
        -> Result<usize, StoreError> {
        Ok(self.query(collection, predicate).await?.len())
    }
}
