use serde::{Deserialize, Serialize};

use super::status::{parse_created_at, Status};
use super::timeline::TimelineBucket;
use crate::store::{tweets, Row};

/// A cached tweet as it is stored in the `tweets` collection.
///
/// The same remote status may be cached once per bucket; `tweet_id` alone is
/// not unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetRecord {
    pub tweet_id: i64,
    pub account_id: i64,
    pub timeline: TimelineBucket,
    pub favorited: bool,
    pub retweeted: bool,
    pub text: String,
    pub user_id: i64,
    pub screen_name: String,
    pub user_name: String,
    /// Screen name of the retweeter when the status is a retweet.
    pub retweeted_by: Option<String>,
    pub in_reply_to_status_id: Option<i64>,
    /// Epoch milliseconds.
    pub created_at: Option<i64>,
}

impl TweetRecord {
    /// Project a remote status into a row for `bucket`.
    ///
    /// For retweets the displayed text and author come from the original
    /// status while `tweet_id` stays the retweet's own id, so deletion
    /// notices for the retweet still find it.
    pub fn from_status(status: &Status, account_id: i64, bucket: TimelineBucket) -> Self {
        let shown = status.retweeted_status().unwrap_or(status);
        Self {
            tweet_id: status.id,
            account_id,
            timeline: bucket,
            favorited: status.favorited || bucket == TimelineBucket::Favorites,
            retweeted: status.retweeted,
            text: shown.text.clone(),
            user_id: shown.user.id,
            screen_name: shown.user.screen_name.clone(),
            user_name: shown.user.name.clone(),
            retweeted_by: status
                .is_retweet()
                .then(|| status.user.screen_name.clone()),
            in_reply_to_status_id: shown.in_reply_to_status_id,
            created_at: shown.created_at.as_deref().and_then(parse_created_at),
        }
    }

    pub fn to_row(&self) -> Row {
        Row::new()
            .with(tweets::TWEET_ID, self.tweet_id)
            .with(tweets::ACCOUNT_ID, self.account_id)
            .with(tweets::TIMELINE_ID, self.timeline.id())
            .with(tweets::FAVORITED, self.favorited)
            .with(tweets::RETWEETED, self.retweeted)
            .with(tweets::TEXT, self.text.as_str())
            .with(tweets::USER_ID, self.user_id)
            .with(tweets::SCREEN_NAME, self.screen_name.as_str())
            .with(tweets::USER_NAME, self.user_name.as_str())
            .with(tweets::RETWEETED_BY, self.retweeted_by.clone())
            .with(tweets::IN_REPLY_TO_STATUS_ID, self.in_reply_to_status_id)
            .with(tweets::CREATED_AT, self.created_at)
    }

    /// Read a record back from a stored row. Returns `None` when an identity
    /// column is missing or the timeline id is unknown.
    pub fn from_row(row: &Row) -> Option<Self> {
        Some(Self {
            tweet_id: row.get_i64(tweets::TWEET_ID)?,
            account_id: row.get_i64(tweets::ACCOUNT_ID)?,
            timeline: TimelineBucket::from_id(row.get_i64(tweets::TIMELINE_ID)?)?,
            favorited: row.get_bool(tweets::FAVORITED).unwrap_or(false),
            retweeted: row.get_bool(tweets::RETWEETED).unwrap_or(false),
            text: row.get_str(tweets::TEXT).unwrap_or_default().to_string(),
            user_id: row.get_i64(tweets::USER_ID).unwrap_or_default(),
            screen_name: row
                .get_str(tweets::SCREEN_NAME)
                .unwrap_or_default()
                .to_string(),
            user_name: row.get_str(tweets::USER_NAME).unwrap_or_default().to_string(),
            retweeted_by: row.get_str(tweets::RETWEETED_BY).map(str::to_string),
            in_reply_to_status_id: row.get_i64(tweets::IN_REPLY_TO_STATUS_ID),
            created_at: row.get_i64(tweets::CREATED_AT),
        })
    }
}
