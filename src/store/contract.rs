//! Collections and column names understood by the local store.

use serde::{Deserialize, Serialize};

/// A named collection of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Tweets,
    Directs,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Tweets => "tweets",
            Collection::Directs => "directs",
        }
    }

    /// Columns every inserted row must carry.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Collection::Tweets => &[tweets::TWEET_ID, tweets::ACCOUNT_ID, tweets::TIMELINE_ID],
            Collection::Directs => &[directs::DIRECT_ID, directs::ACCOUNT_ID],
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Columns of [`Collection::Tweets`].
pub mod tweets {
    pub const TWEET_ID: &str = "tweet_id";
    pub const ACCOUNT_ID: &str = "account_id";
    pub const TIMELINE_ID: &str = "timeline_id";
    pub const FAVORITED: &str = "favorited";
    pub const RETWEETED: &str = "retweeted";
    pub const TEXT: &str = "text";
    pub const USER_ID: &str = "user_id";
    pub const SCREEN_NAME: &str = "screen_name";
    pub const USER_NAME: &str = "user_name";
    pub const RETWEETED_BY: &str = "retweeted_by";
    pub const IN_REPLY_TO_STATUS_ID: &str = "in_reply_to_status_id";
    pub const CREATED_AT: &str = "created_at";
}

/// Columns of [`Collection::Directs`].
pub mod directs {
    pub const DIRECT_ID: &str = "direct_id";
    pub const ACCOUNT_ID: &str = "account_id";
    pub const SENDER_ID: &str = "sender_id";
    pub const SENDER_SCREEN_NAME: &str = "sender_screen_name";
    pub const RECIPIENT_ID: &str = "recipient_id";
    pub const RECIPIENT_SCREEN_NAME: &str = "recipient_screen_name";
    pub const TEXT: &str = "text";
    pub const CREATED_AT: &str = "created_at";
}

/// Identifier of an inserted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId {
    pub collection: Collection,
    pub id: u64,
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "content://robird/{}/{}", self.collection, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_display() {
        let id = RowId {
            collection: Collection::Tweets,
            id: 17,
        };
        assert_eq!(id.to_string(), "content://robird/tweets/17");
    }

    #[test]
    fn test_required_columns() {
        assert!(Collection::Tweets
            .required_columns()
            .contains(&tweets::TIMELINE_ID));
        assert!(Collection::Directs
            .required_columns()
            .contains(&directs::DIRECT_ID));
    }
}
