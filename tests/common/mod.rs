//! Common test utilities for integration tests.
//!
//! Fixtures for accounts, statuses and stream events shared by the
//! reconciler, session and adapter tests.

#![allow(dead_code)]

use std::sync::Arc;

use robird::models::{Account, AuthIdentity, DirectMessage, Status, User, UserMention};
use robird::store::{tweets, Collection, MemoryStore, Predicate, Row};
use robird::stream::FavoriteNotice;
use robird::traits::LocalStore;

/// Local account id used by fixtures.
pub const ACCOUNT_ID: i64 = 1;
/// Remote user id of the fixture account holder.
pub const USER_ID: i64 = 42;
/// A second local account sharing the store.
pub const OTHER_ACCOUNT_ID: i64 = 2;

pub fn test_account() -> Arc<Account> {
    Arc::new(Account::new(
        ACCOUNT_ID,
        USER_ID,
        "robird",
        AuthIdentity::new("test-access-token-12345"),
    ))
}

pub fn me() -> User {
    User::new(USER_ID, "robird")
}

pub fn stranger(id: i64) -> User {
    User::new(id, format!("user{}", id))
}

pub fn mention(user: &User) -> UserMention {
    UserMention {
        id: user.id,
        screen_name: user.screen_name.clone(),
    }
}

/// A plain status by someone else.
pub fn home_status(id: i64) -> Status {
    Status::new(id, stranger(7), format!("status {}", id))
}

pub fn mentioning_status(id: i64) -> Status {
    Status::new(id, stranger(7), "hello @robird").with_mentions(vec![mention(&me())])
}

/// Someone retweeting one of our statuses.
pub fn retweet_of_own(id: i64, original_id: i64) -> Status {
    let original = Status::new(original_id, me(), "my words");
    Status::new(id, stranger(8), "RT @robird: my words").with_retweeted_status(original)
}

pub fn favorite_notice(source: User, status: Status) -> FavoriteNotice {
    FavoriteNotice {
        target: status.user.clone(),
        source,
        status,
    }
}

pub fn direct_message(id: i64) -> DirectMessage {
    DirectMessage::new(id, stranger(7), me(), format!("dm {}", id))
}

/// Raw tweet row, for seeding a store directly.
pub fn tweet_row(tweet_id: i64, account_id: i64, timeline_id: i64, favorited: bool) -> Row {
    Row::new()
        .with(tweets::TWEET_ID, tweet_id)
        .with(tweets::ACCOUNT_ID, account_id)
        .with(tweets::TIMELINE_ID, timeline_id)
        .with(tweets::FAVORITED, favorited)
}

pub async fn all_tweets(store: &MemoryStore) -> Vec<Row> {
    store
        .query(Collection::Tweets, &Predicate::all())
        .await
        .expect("query tweets")
}

pub async fn all_directs(store: &MemoryStore) -> Vec<Row> {
    store
        .query(Collection::Directs, &Predicate::all())
        .await
        .expect("query directs")
}
