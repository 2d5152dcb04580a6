//! Mock stream client for testing.
//!
//! Lets tests push events into whatever sinks the code under test has
//! registered, and inspect how the client was driven.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StreamError;
use crate::models::AuthIdentity;
use crate::stream::{EventSink, StreamEvent, StreamItem};
use crate::traits::StreamClient;

/// Mock stream client for testing.
///
/// This mock allows:
/// - Injecting events and stream errors into registered sinks
/// - Recording `open` / `close` calls
/// - Making `open` fail
///
/// # Example
///
/// ```ignore
/// use robird::adapters::mock::MockStreamClient;
///
/// let mock = Arc::new(MockStreamClient::new());
/// let session = StreamSession::spawn(account, mock.clone(), store, 16);
/// session.start();
/// mock.wait_for_listeners(1).await;
/// mock.inject_event(StreamEvent::StatusDeleted(notice)).await;
/// ```
#[derive(Clone, Default)]
pub struct MockStreamClient {
    sinks: Arc<Mutex<Vec<EventSink>>>,
    open_calls: Arc<Mutex<Vec<AuthIdentity>>>,
    close_count: Arc<Mutex<usize>>,
    open_should_fail: Arc<Mutex<Option<StreamError>>>,
}

impl MockStreamClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every registered sink.
    pub async fn inject_event(&self, event: StreamEvent) {
        self.inject(Ok(event)).await;
    }

    /// Deliver a stream exception to every registered sink.
    pub async fn inject_error(&self, err: StreamError) {
        self.inject(Err(err)).await;
    }

    /// Inject multiple events in order.
    pub async fn inject_events(&self, events: Vec<StreamEvent>) {
        for event in events {
            self.inject_event(event).await;
        }
    }

    async fn inject(&self, item: StreamItem) {
        let sinks = self.sinks.lock().await.clone();
        for sink in sinks {
            // Ignore send errors (receiver gone)
            let _ = sink.send(item.clone()).await;
        }
    }

    /// Make the next `open` calls fail with `err`, or succeed again with `None`.
    pub async fn set_open_should_fail(&self, err: Option<StreamError>) {
        *self.open_should_fail.lock().await = err;
    }

    /// Identities passed to `open`, in call order.
    pub async fn open_calls(&self) -> Vec<AuthIdentity> {
        self.open_calls.lock().await.clone()
    }

    pub async fn close_count(&self) -> usize {
        *self.close_count.lock().await
    }

    pub async fn listener_count(&self) -> usize {
        self.sinks.lock().await.len()
    }

    /// Yield until at least `count` sinks are registered.
    pub async fn wait_for_listeners(&self, count: usize) {
        while self.listener_count().await < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl StreamClient for MockStreamClient {
    async fn register(&self, sink: EventSink) {
        self.sinks.lock().await.push(sink);
    }

    async fn clear_listeners(&self) {
        self.sinks.lock().await.clear();
    }

    async fn open(&self, identity: &AuthIdentity) -> Result<(), StreamError> {
        self.open_calls.lock().await.push(identity.clone());
        match self.open_should_fail.lock().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn close(&self) {
        *self.close_count.lock().await += 1;
    }
}
