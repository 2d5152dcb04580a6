//! Error handling for robird.
//!
//! | Error | Raised by | Handling |
//! |-------|-----------|----------|
//! | [`StreamError`] | stream clients, decoder | logged per event, stream continues |
//! | [`StoreError`] | local stores | logged, that event's effect is dropped |
//! | [`ConfigError`] | config, account file, CLI | fatal at startup |
//!
//! [`RobirdError`] wraps all three for callers that just want `?`.

mod config;
mod robird_error;
mod store;
mod stream;

pub use config::ConfigError;
pub use robird_error::{RobirdError, RobirdResult};
pub use store::StoreError;
pub use stream::StreamError;
