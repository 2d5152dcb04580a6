//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestStreamClient`] - User-stream connection using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockStreamClient`] - Event injection for testing

pub mod mock;
pub mod reqwest_stream;

pub use mock::MockStreamClient;
pub use reqwest_stream::ReqwestStreamClient;
