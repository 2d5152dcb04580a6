//! User stream decoding.
//!
//! # Module structure
//! - `events` - Event type definitions (StreamEvent, IgnoredKind, sinks)
//! - `payloads` - Internal payload deserialization structs
//! - `decoder` - Line splitting and message dispatch (StreamDecoder, decode_message)

mod decoder;
mod events;
mod payloads;

pub use decoder::{decode_message, StreamDecoder};
pub use events::{
    DeletionNotice, EventSink, FavoriteNotice, IgnoredKind, StreamEvent, StreamItem,
};
