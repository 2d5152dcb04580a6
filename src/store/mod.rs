//! Local cache of tweets and direct messages.
//!
//! Rows are flat column maps grouped into collections. The
//! [`LocalStore`](crate::traits::LocalStore) trait is the only way the rest
//! of the crate touches them; this module provides the row model, predicate
//! builder, and two implementations:
//!
//! - [`MemoryStore`] - in-process, used by tests
//! - [`JsonFileStore`] - in-process with a JSON snapshot on disk

pub mod contract;
mod file;
mod memory;
mod predicate;
mod value;

pub use contract::{directs, tweets, Collection, RowId};
pub use file::JsonFileStore;
pub use memory::{MemoryStore, Table, Tables};
pub use predicate::{Comparison, Predicate};
pub use value::{Row, Value};
