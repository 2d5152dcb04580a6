//! robird - mirrors an account's user stream into a local cache.
//!
//! A [`session::StreamSession`] drives a [`traits::StreamClient`] and feeds
//! every decoded event through a [`reconciler::StreamReconciler`], which turns
//! it into inserts, updates and deletes on a [`traits::LocalStore`].

pub mod account;
pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reconciler;
pub mod session;
pub mod startup;
pub mod store;
pub mod stream;
pub mod traits;

pub use error::{RobirdError, RobirdResult};
