//! Remote stream client trait abstraction.
//!
//! Provides a trait-based abstraction over the user-stream connection,
//! enabling dependency injection and mocking in tests.

use async_trait::async_trait;

use crate::error::StreamError;
use crate::models::AuthIdentity;
use crate::stream::EventSink;

/// Trait for a push-style user-stream connection.
///
/// Decoded events, and per-message decode errors, are delivered to every
/// registered sink in the order they arrive on the wire.
///
/// # Example
///
/// ```ignore
/// use robird::traits::StreamClient;
///
/// async fn listen<C: StreamClient>(client: &C, identity: &AuthIdentity) {
///     let (tx, mut rx) = tokio::sync::mpsc::channel(64);
///     client.register(tx).await;
///     client.open(identity).await?;
///     while let Some(item) = rx.recv().await {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait StreamClient: Send + Sync {
    /// Add a sink that receives every decoded item.
    async fn register(&self, sink: EventSink);

    /// Remove every registered sink.
    async fn clear_listeners(&self);

    /// Connect on behalf of `identity` and start delivering items.
    ///
    /// # Returns
    /// Ok(()) once the stream is established, or the connection error.
    async fn open(&self, identity: &AuthIdentity) -> Result<(), StreamError>;

    /// Close the connection. Safe to call when not connected.
    async fn close(&self);
}
