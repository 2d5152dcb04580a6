//! Typed user-stream events.

use tokio::sync::mpsc;

use crate::error::StreamError;
use crate::models::{DirectMessage, Status, User};

/// What a stream client delivers into a sink for every line it reads.
pub type StreamItem = Result<StreamEvent, StreamError>;

/// Channel end a stream client pushes [`StreamItem`]s into.
pub type EventSink = mpsc::Sender<StreamItem>;

/// Removal notice for a status or a direct message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionNotice {
    pub id: i64,
    pub user_id: i64,
}

/// `favorite` / `unfavorite` event: `source` acted on `target`'s `status`.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteNotice {
    pub source: User,
    pub target: User,
    pub status: Status,
}

/// Stream message kinds that are decoded but produce no store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoredKind {
    TrackLimitation,
    ScrubGeo,
    StallWarning,
    FriendList,
    Follow,
    Unfollow,
    ListMemberAdded,
    ListMemberRemoved,
    ListSubscribed,
    ListUnsubscribed,
    ListCreated,
    ListUpdated,
    ListDestroyed,
    ProfileUpdate,
    UserDeletion,
    UserSuspension,
    Block,
    Unblock,
    RetweetedRetweet,
    FavoritedRetweet,
    QuotedTweet,
    /// An `event` name this crate does not know.
    Other(String),
}

impl IgnoredKind {
    /// Map an `event` field value to its kind.
    pub fn from_event_name(name: &str) -> Self {
        match name {
            "follow" => IgnoredKind::Follow,
            "unfollow" => IgnoredKind::Unfollow,
            "list_member_added" => IgnoredKind::ListMemberAdded,
            "list_member_removed" => IgnoredKind::ListMemberRemoved,
            "list_user_subscribed" => IgnoredKind::ListSubscribed,
            "list_user_unsubscribed" => IgnoredKind::ListUnsubscribed,
            "list_created" => IgnoredKind::ListCreated,
            "list_updated" => IgnoredKind::ListUpdated,
            "list_destroyed" => IgnoredKind::ListDestroyed,
            "user_update" => IgnoredKind::ProfileUpdate,
            "user_delete" => IgnoredKind::UserDeletion,
            "user_suspend" => IgnoredKind::UserSuspension,
            "block" => IgnoredKind::Block,
            "unblock" => IgnoredKind::Unblock,
            "retweeted_retweet" => IgnoredKind::RetweetedRetweet,
            "favorited_retweet" => IgnoredKind::FavoritedRetweet,
            "quoted_tweet" => IgnoredKind::QuotedTweet,
            other => IgnoredKind::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            IgnoredKind::TrackLimitation => "limit",
            IgnoredKind::ScrubGeo => "scrub_geo",
            IgnoredKind::StallWarning => "warning",
            IgnoredKind::FriendList => "friends",
            IgnoredKind::Follow => "follow",
            IgnoredKind::Unfollow => "unfollow",
            IgnoredKind::ListMemberAdded => "list_member_added",
            IgnoredKind::ListMemberRemoved => "list_member_removed",
            IgnoredKind::ListSubscribed => "list_user_subscribed",
            IgnoredKind::ListUnsubscribed => "list_user_unsubscribed",
            IgnoredKind::ListCreated => "list_created",
            IgnoredKind::ListUpdated => "list_updated",
            IgnoredKind::ListDestroyed => "list_destroyed",
            IgnoredKind::ProfileUpdate => "user_update",
            IgnoredKind::UserDeletion => "user_delete",
            IgnoredKind::UserSuspension => "user_suspend",
            IgnoredKind::Block => "block",
            IgnoredKind::Unblock => "unblock",
            IgnoredKind::RetweetedRetweet => "retweeted_retweet",
            IgnoredKind::FavoritedRetweet => "favorited_retweet",
            IgnoredKind::QuotedTweet => "quoted_tweet",
            IgnoredKind::Other(name) => name,
        }
    }
}

/// One decoded user-stream message.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A status appeared on the account's timeline.
    StatusPosted(Status),
    /// A status was deleted.
    StatusDeleted(DeletionNotice),
    Favorited(FavoriteNotice),
    Unfavorited(FavoriteNotice),
    DirectMessage(DirectMessage),
    DirectMessageDeleted(DeletionNotice),
    /// A kind with no local effect.
    Ignored(IgnoredKind),
}

impl StreamEvent {
    /// Returns the event type name as a string for logging.
    pub fn event_type_name(&self) -> &str {
        match self {
            StreamEvent::StatusPosted(_) => "status",
            StreamEvent::StatusDeleted(_) => "delete_status",
            StreamEvent::Favorited(_) => "favorite",
            StreamEvent::Unfavorited(_) => "unfavorite",
            StreamEvent::DirectMessage(_) => "direct_message",
            StreamEvent::DirectMessageDeleted(_) => "delete_direct_message",
            StreamEvent::Ignored(kind) => kind.name(),
        }
    }
}
