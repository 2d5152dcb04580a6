//! Stream event to store mutation mapping.
//!
//! The reconciler holds no state of its own beyond the owning account and the
//! store handle. Each event produces one short sequence of store calls.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::StoreError;
use crate::models::{Account, DirectRecord, Status, TimelineBucket, TweetRecord};
use crate::store::{directs, tweets, Collection, Predicate, Row, RowId};
use crate::stream::{DeletionNotice, FavoriteNotice, IgnoredKind, StreamEvent};
use crate::traits::LocalStore;

/// What applying one event did to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileOutcome {
    /// A record was inserted. `bucket` is `None` for direct messages.
    Inserted {
        row: RowId,
        bucket: Option<TimelineBucket>,
    },
    /// Tweet records were removed after a deletion notice.
    TweetsDeleted { tweet_id: i64, count: usize },
    /// Favorite flags were cleared and the favorites entry removed.
    Unfavorited {
        tweet_id: i64,
        updated: usize,
        deleted: usize,
    },
    /// Direct message records were removed after a deletion notice.
    DirectsDeleted { direct_id: i64, count: usize },
    /// A favorite or unfavorite by someone other than the account holder.
    NotOwnAction { source_id: i64 },
    /// An event kind with no local effect.
    Ignored(IgnoredKind),
}

/// Pick the bucket a newly posted status belongs to for `user_id`.
///
/// A retweet of the account's own status wins over a mention of the account,
/// which wins over the home timeline.
pub fn classify(status: &Status, user_id: i64) -> TimelineBucket {
    let own_retweeted = status
        .retweeted_status()
        .is_some_and(|original| original.user.id == user_id);
    if own_retweeted {
        return TimelineBucket::Retweets;
    }
    if status.mentions().iter().any(|mention| mention.id == user_id) {
        return TimelineBucket::Mentions;
    }
    TimelineBucket::Home
}

/// Applies stream events for one account to a local store.
pub struct StreamReconciler<S: LocalStore + ?Sized> {
    account: Arc<Account>,
    store: Arc<S>,
}

impl<S: LocalStore + ?Sized> StreamReconciler<S> {
    pub fn new(account: Arc<Account>, store: Arc<S>) -> Self {
        Self { account, store }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Apply one event. A store failure fails only this event; nothing
    /// already written for it is rolled back.
    pub async fn apply(&self, event: &StreamEvent) -> Result<ReconcileOutcome, StoreError> {
        match event {
            StreamEvent::StatusPosted(status) => self.on_status(status).await,
            StreamEvent::StatusDeleted(notice) => self.on_status_deleted(notice).await,
            StreamEvent::Favorited(notice) => self.on_favorite(notice).await,
            StreamEvent::Unfavorited(notice) => self.on_unfavorite(notice).await,
            StreamEvent::DirectMessage(message) => {
                let record = DirectRecord::from_message(message, self.account.id());
                let row = self.store.insert(Collection::Directs, record.to_row()).await?;
                debug!("Stored direct message {} as {}", message.id, row);
                Ok(ReconcileOutcome::Inserted { row, bucket: None })
            }
            StreamEvent::DirectMessageDeleted(notice) => self.on_direct_deleted(notice).await,
            StreamEvent::Ignored(kind) => {
                trace!("Ignoring stream message: {}", kind.name());
                Ok(ReconcileOutcome::Ignored(kind.clone()))
            }
        }
    }

    async fn insert_tweet(
        &self,
        status: &Status,
        bucket: TimelineBucket,
    ) -> Result<ReconcileOutcome, StoreError> {
        let record = TweetRecord::from_status(status, self.account.id(), bucket);
        let row = self.store.insert(Collection::Tweets, record.to_row()).await?;
        debug!("Stored tweet {} in {} as {}", status.id, bucket, row);
        Ok(ReconcileOutcome::Inserted {
            row,
            bucket: Some(bucket),
        })
    }

    async fn on_status(&self, status: &Status) -> Result<ReconcileOutcome, StoreError> {
        let bucket = classify(status, self.account.user_id());
        self.insert_tweet(status, bucket).await
    }

    // Matches every account's copy of the tweet, not only this account's.
    async fn on_status_deleted(
        &self,
        notice: &DeletionNotice,
    ) -> Result<ReconcileOutcome, StoreError> {
        let predicate = Predicate::all().eq(tweets::TWEET_ID, notice.id);
        let count = self.store.delete(Collection::Tweets, &predicate).await?;
        debug!("Deleted {} records for tweet {}", count, notice.id);
        Ok(ReconcileOutcome::TweetsDeleted {
            tweet_id: notice.id,
            count,
        })
    }

    async fn on_favorite(&self, notice: &FavoriteNotice) -> Result<ReconcileOutcome, StoreError> {
        if notice.source.id != self.account.user_id() {
            trace!("Favorite by user {} is not ours", notice.source.id);
            return Ok(ReconcileOutcome::NotOwnAction {
                source_id: notice.source.id,
            });
        }
        self.insert_tweet(&notice.status, TimelineBucket::Favorites)
            .await
    }

    async fn on_unfavorite(
        &self,
        notice: &FavoriteNotice,
    ) -> Result<ReconcileOutcome, StoreError> {
        if notice.source.id != self.account.user_id() {
            trace!("Unfavorite by user {} is not ours", notice.source.id);
            return Ok(ReconcileOutcome::NotOwnAction {
                source_id: notice.source.id,
            });
        }

        let tweet_id = notice.status.id;
        let account_id = self.account.id();

        let still_favorited = Predicate::all()
            .eq(tweets::TWEET_ID, tweet_id)
            .eq(tweets::ACCOUNT_ID, account_id)
            .ne(tweets::TIMELINE_ID, TimelineBucket::FAVORITES_ID)
            .eq(tweets::FAVORITED, true);
        let updated = self
            .store
            .update(
                Collection::Tweets,
                Row::new().with(tweets::FAVORITED, false),
                &still_favorited,
            )
            .await?;

        let favorites_entry = Predicate::all()
            .eq(tweets::TWEET_ID, tweet_id)
            .eq(tweets::ACCOUNT_ID, account_id)
            .eq(tweets::TIMELINE_ID, TimelineBucket::FAVORITES_ID);
        let deleted = self
            .store
            .delete(Collection::Tweets, &favorites_entry)
            .await?;

        debug!(
            "Unfavorited tweet {}: {} updated, {} removed",
            tweet_id, updated, deleted
        );
        Ok(ReconcileOutcome::Unfavorited {
            tweet_id,
            updated,
            deleted,
        })
    }

    async fn on_direct_deleted(
        &self,
        notice: &DeletionNotice,
    ) -> Result<ReconcileOutcome, StoreError> {
        let predicate = Predicate::all()
            .eq(directs::DIRECT_ID, notice.id)
            .eq(directs::ACCOUNT_ID, self.account.id());
        let count = self.store.delete(Collection::Directs, &predicate).await?;
        debug!("Deleted {} records for direct message {}", count, notice.id);
        Ok(ReconcileOutcome::DirectsDeleted {
            direct_id: notice.id,
            count,
        })
    }
}
