//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`StreamClient`] - Remote user-stream connection
//! - [`LocalStore`] - Local tweet and direct-message cache

pub mod store;
pub mod stream;

pub use store::LocalStore;
pub use stream::StreamClient;
