//! Wire payloads delivered by the user stream.
//!
//! Only the fields the reconciler and the cached projections read are
//! modelled; everything else in the service's JSON is ignored.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_optional_id};

/// Timestamp format used by the service, e.g. `Wed Aug 27 13:08:45 +0000 2008`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse a service timestamp into epoch milliseconds.
pub fn parse_created_at(value: &str) -> Option<i64> {
    DateTime::parse_from_str(value, CREATED_AT_FORMAT)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

/// A remote user as embedded in statuses and events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub screen_name: String,
    #[serde(default)]
    pub name: String,
}

impl User {
    pub fn new(id: i64, screen_name: impl Into<String>) -> Self {
        let screen_name = screen_name.into();
        Self {
            id,
            name: screen_name.clone(),
            screen_name,
        }
    }
}

/// A `@mention` entity inside a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMention {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub screen_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub user_mentions: Vec<UserMention>,
}

/// A remote status (tweet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub text: String,
    pub user: User,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub retweeted: bool,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub in_reply_to_status_id: Option<i64>,
    #[serde(default)]
    pub entities: Entities,
    #[serde(default)]
    pub retweeted_status: Option<Box<Status>>,
}

impl Status {
    pub fn new(id: i64, user: User, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            user,
            created_at: None,
            favorited: false,
            retweeted: false,
            in_reply_to_status_id: None,
            entities: Entities::default(),
            retweeted_status: None,
        }
    }

    pub fn with_mentions(mut self, mentions: Vec<UserMention>) -> Self {
        self.entities.user_mentions = mentions;
        self
    }

    pub fn with_retweeted_status(mut self, original: Status) -> Self {
        self.retweeted_status = Some(Box::new(original));
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    pub fn with_favorited(mut self, favorited: bool) -> Self {
        self.favorited = favorited;
        self
    }

    pub fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }

    pub fn retweeted_status(&self) -> Option<&Status> {
        self.retweeted_status.as_deref()
    }

    pub fn mentions(&self) -> &[UserMention] {
        &self.entities.user_mentions
    }
}

/// A remote direct message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectMessage {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub text: String,
    pub sender: User,
    pub recipient: User,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl DirectMessage {
    pub fn new(id: i64, sender: User, recipient: User, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            recipient,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_created_at() {
        let millis = parse_created_at("Wed Aug 27 13:08:45 +0000 2008").unwrap();
        assert_eq!(millis, 1_219_842_525_000);
    }

    #[test]
    fn test_parse_created_at_with_offset() {
        let utc = parse_created_at("Wed Aug 27 13:08:45 +0000 2008").unwrap();
        let shifted = parse_created_at("Wed Aug 27 15:08:45 +0200 2008").unwrap();
        assert_eq!(utc, shifted);
    }

    #[test]
    fn test_parse_created_at_rejects_other_formats() {
        assert_eq!(parse_created_at("2008-08-27T13:08:45Z"), None);
        assert_eq!(parse_created_at(""), None);
    }

    #[test]
    fn test_status_deserialize_minimal() {
        let json = r#"{"id": 100, "text": "hi", "user": {"id": 7, "screen_name": "seven"}}"#;
        let status: Status = serde_json::from_str(json).unwrap();
        assert_eq!(status.id, 100);
        assert_eq!(status.user.id, 7);
        assert!(!status.is_retweet());
        assert!(status.mentions().is_empty());
        assert_eq!(status.in_reply_to_status_id, None);
    }

    #[test]
    fn test_status_deserialize_retweet_with_mentions() {
        let json = r#"{
            "id": 200,
            "text": "RT @me: hello @friend",
            "user": {"id": 8, "screen_name": "fan"},
            "in_reply_to_status_id": null,
            "entities": {"user_mentions": [{"id": 42, "screen_name": "me"}]},
            "retweeted_status": {
                "id": 150,
                "text": "hello @friend",
                "user": {"id": 42, "screen_name": "me"}
            }
        }"#;
        let status: Status = serde_json::from_str(json).unwrap();
        assert!(status.is_retweet());
        assert_eq!(status.retweeted_status().unwrap().user.id, 42);
        assert_eq!(status.mentions()[0].id, 42);
    }

    #[test]
    fn test_status_builders() {
        let status = Status::new(1, User::new(2, "two"), "text")
            .with_mentions(vec![UserMention {
                id: 3,
                screen_name: "three".to_string(),
            }])
            .with_favorited(true);
        assert!(status.favorited);
        assert_eq!(status.mentions().len(), 1);
        assert_eq!(status.user.name, "two");
    }

    #[test]
    fn test_direct_message_deserialize() {
        let json = r#"{
            "id": 5,
            "text": "psst",
            "sender": {"id": 1, "screen_name": "a"},
            "recipient": {"id": 2, "screen_name": "b"},
            "created_at": "Wed Aug 27 13:08:45 +0000 2008"
        }"#;
        let message: DirectMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.id, 5);
        assert_eq!(message.sender.screen_name, "a");
        assert_eq!(message.recipient.id, 2);
    }
}
