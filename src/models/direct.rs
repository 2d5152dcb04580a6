use serde::{Deserialize, Serialize};

use super::status::{parse_created_at, DirectMessage};
use crate::store::{directs, Row};

/// A cached direct message as stored in the `directs` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectRecord {
    pub direct_id: i64,
    pub account_id: i64,
    pub sender_id: i64,
    pub sender_screen_name: String,
    pub recipient_id: i64,
    pub recipient_screen_name: String,
    pub text: String,
    pub created_at: Option<i64>,
}

impl DirectRecord {
    pub fn from_message(message: &DirectMessage, account_id: i64) -> Self {
        Self {
            direct_id: message.id,
            account_id,
            sender_id: message.sender.id,
            sender_screen_name: message.sender.screen_name.clone(),
            recipient_id: message.recipient.id,
            recipient_screen_name: message.recipient.screen_name.clone(),
            text: message.text.clone(),
            created_at: message.created_at.as_deref().and_then(parse_created_at),
        }
    }

    pub fn to_row(&self) -> Row {
        Row::new()
            .with(directs::DIRECT_ID, self.direct_id)
            .with(directs::ACCOUNT_ID, self.account_id)
            .with(directs::SENDER_ID, self.sender_id)
            .with(directs::SENDER_SCREEN_NAME, self.sender_screen_name.as_str())
            .with(directs::RECIPIENT_ID, self.recipient_id)
            .with(
                directs::RECIPIENT_SCREEN_NAME,
                self.recipient_screen_name.as_str(),
            )
            .with(directs::TEXT, self.text.as_str())
            .with(directs::CREATED_AT, self.created_at)
    }

    pub fn from_row(row: &Row) -> Option<Self> {
        let text = |column| row.get_str(column).unwrap_or_default().to_string();
        Some(Self {
            direct_id: row.get_i64(directs::DIRECT_ID)?,
            account_id: row.get_i64(directs::ACCOUNT_ID)?,
            sender_id: row.get_i64(directs::SENDER_ID).unwrap_or_default(),
            sender_screen_name: text(directs::SENDER_SCREEN_NAME),
            recipient_id: row.get_i64(directs::RECIPIENT_ID).unwrap_or_default(),
            recipient_screen_name: text(directs::RECIPIENT_SCREEN_NAME),
            text: text(directs::TEXT),
            created_at: row.get_i64(directs::CREATED_AT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    #[test]
    fn test_from_message() {
        let message = DirectMessage::new(5, User::new(1, "a"), User::new(2, "b"), "psst");
        let record = DirectRecord::from_message(&message, 9);
        assert_eq!(record.direct_id, 5);
        assert_eq!(record.account_id, 9);
        assert_eq!(record.sender_screen_name, "a");
        assert_eq!(record.recipient_id, 2);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn test_row_round_trip() {
        let message = DirectMessage::new(5, User::new(1, "a"), User::new(2, "b"), "psst");
        let record = DirectRecord::from_message(&message, 9);
        let row = record.to_row();
        assert_eq!(row.get_i64(directs::ACCOUNT_ID), Some(9));
        assert_eq!(DirectRecord::from_row(&row), Some(record));
    }
}
