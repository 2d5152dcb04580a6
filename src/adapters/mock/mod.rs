//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockStreamClient`] - Stream client with event injection
//!
//! For the store side, [`crate::store::MemoryStore`] is used directly.

pub mod stream;

pub use stream::MockStreamClient;
