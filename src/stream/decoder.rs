//! User-stream line decoder.
//!
//! The stream body is a sequence of JSON objects, one per `\r\n` terminated
//! line. Blank lines are keep-alives. Chunks from the transport may split a
//! line anywhere, including inside a multi-byte character.

use serde::Deserialize;
use serde_json::Value;

use super::events::{DeletionNotice, FavoriteNotice, IgnoredKind, StreamEvent, StreamItem};
use super::payloads::{DeleteEnvelope, FavoritePayload};
use crate::error::StreamError;
use crate::models::{DirectMessage, Status};

/// Longest slice of an unknown message kept in the error.
const PREVIEW_LEN: usize = 80;

/// Longest line accepted before the decoder gives up on it.
pub const DEFAULT_MAX_LINE: usize = 1024 * 1024;

/// Stateful decoder that accumulates bytes and emits one item per line.
#[derive(Debug)]
pub struct StreamDecoder {
    buffer: Vec<u8>,
    max_line: usize,
    // Set while skipping the rest of an oversized line.
    discarding: bool,
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::with_max_line(DEFAULT_MAX_LINE)
    }
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder that rejects lines longer than `max_line` bytes.
    pub fn with_max_line(max_line: usize) -> Self {
        Self {
            buffer: Vec::new(),
            max_line,
            discarding: false,
        }
    }

    /// Feed a chunk, returning an item for every line it completes.
    ///
    /// A line that grows past the limit is reported once as
    /// [`StreamError::LineTooLong`] and skipped up to its newline.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<StreamItem> {
        self.buffer.extend_from_slice(chunk);

        let mut items = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if std::mem::take(&mut self.discarding) {
                continue;
            }
            if line.len() > self.max_line {
                items.push(Err(self.too_long()));
            } else if let Some(item) = decode_line(&line) {
                items.push(item);
            }
        }

        if self.buffer.len() > self.max_line {
            if !self.discarding {
                items.push(Err(self.too_long()));
                self.discarding = true;
            }
            self.buffer.clear();
        }
        items
    }

    /// Decode whatever is left once the body has ended without a newline.
    pub fn finish(&mut self) -> Option<StreamItem> {
        let rest = std::mem::take(&mut self.buffer);
        if std::mem::take(&mut self.discarding) {
            return None;
        }
        decode_line(&rest)
    }

    /// Bytes received but not yet terminated by a newline.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    fn too_long(&self) -> StreamError {
        StreamError::LineTooLong {
            limit: self.max_line,
        }
    }
}

fn decode_line(raw: &[u8]) -> Option<StreamItem> {
    let line = match std::str::from_utf8(raw) {
        Ok(text) => text.trim(),
        Err(e) => {
            return Some(Err(StreamError::InvalidEncoding {
                message: e.to_string(),
            }))
        }
    };
    if line.is_empty() {
        return None;
    }
    Some(decode_message(line))
}

/// Decode one complete stream message.
pub fn decode_message(line: &str) -> StreamItem {
    let value: Value = serde_json::from_str(line)?;
    let Some(object) = value.as_object() else {
        return Err(unknown(line));
    };

    if let Some(delete) = object.get("delete") {
        return decode_delete(delete, line);
    }
    if let Some(message) = object.get("direct_message") {
        let message = DirectMessage::deserialize(message)?;
        return Ok(StreamEvent::DirectMessage(message));
    }
    if let Some(name) = object.get("event").and_then(Value::as_str) {
        return decode_event(name, &value);
    }
    if object.contains_key("limit") {
        return Ok(StreamEvent::Ignored(IgnoredKind::TrackLimitation));
    }
    if object.contains_key("scrub_geo") {
        return Ok(StreamEvent::Ignored(IgnoredKind::ScrubGeo));
    }
    if object.contains_key("warning") {
        return Ok(StreamEvent::Ignored(IgnoredKind::StallWarning));
    }
    if object.contains_key("friends") || object.contains_key("friends_str") {
        return Ok(StreamEvent::Ignored(IgnoredKind::FriendList));
    }
    if ["id", "text", "user"].iter().all(|key| object.contains_key(*key)) {
        let status = Status::deserialize(&value)?;
        return Ok(StreamEvent::StatusPosted(status));
    }

    Err(unknown(line))
}

fn decode_delete(delete: &Value, line: &str) -> StreamItem {
    let envelope = DeleteEnvelope::deserialize(delete)?;
    if let Some(item) = envelope.status {
        return Ok(StreamEvent::StatusDeleted(DeletionNotice {
            id: item.id,
            user_id: item.user_id,
        }));
    }
    if let Some(item) = envelope.direct_message {
        return Ok(StreamEvent::DirectMessageDeleted(DeletionNotice {
            id: item.id,
            user_id: item.user_id,
        }));
    }
    Err(unknown(line))
}

fn decode_event(name: &str, value: &Value) -> StreamItem {
    match name {
        "favorite" | "unfavorite" => {
            let payload = FavoritePayload::deserialize(value)?;
            let notice = FavoriteNotice {
                source: payload.source,
                target: payload.target,
                status: payload.target_object,
            };
            if name == "favorite" {
                Ok(StreamEvent::Favorited(notice))
            } else {
                Ok(StreamEvent::Unfavorited(notice))
            }
        }
        other => Ok(StreamEvent::Ignored(IgnoredKind::from_event_name(other))),
    }
}

fn unknown(line: &str) -> StreamError {
    StreamError::UnknownMessage {
        preview: line.chars().take(PREVIEW_LEN).collect(),
    }
}
