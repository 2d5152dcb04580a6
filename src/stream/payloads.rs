//! Wire payload structs for the envelope-style stream messages.

use serde::Deserialize;

use crate::models::{deserialize_id, Status, User};

/// `{"delete": {...}}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DeleteEnvelope {
    #[serde(default)]
    pub status: Option<DeletedItem>,
    #[serde(default)]
    pub direct_message: Option<DeletedItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DeletedItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: i64,
}

/// `{"event": "favorite", ...}` payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FavoritePayload {
    pub source: User,
    pub target: User,
    pub target_object: Status,
}
