//! Reqwest-based user-stream client adapter.
//!
//! Opens the streaming endpoint with a long-lived GET, decodes the body as it
//! arrives and fans decoded items out to every registered sink.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::StreamError;
use crate::models::AuthIdentity;
use crate::stream::{EventSink, StreamDecoder, StreamItem};
use crate::traits::StreamClient;

/// Stream client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use robird::adapters::ReqwestStreamClient;
/// use robird::traits::StreamClient;
///
/// let client = ReqwestStreamClient::new("https://userstream.twitter.com/1.1/user.json");
/// client.register(tx).await;
/// client.open(account.identity()).await?;
/// ```
pub struct ReqwestStreamClient {
    client: reqwest::Client,
    url: String,
    sinks: Arc<Mutex<Vec<EventSink>>>,
    reader: Mutex<Option<JoinHandle<()>>>,
}

impl ReqwestStreamClient {
    /// Create a client for `url` with default reqwest settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Create a client with a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            sinks: Arc::new(Mutex::new(Vec::new())),
            reader: Mutex::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Number of registered sinks.
    pub async fn listener_count(&self) -> usize {
        self.sinks.lock().await.len()
    }

    /// Whether a reader task is running.
    pub async fn is_open(&self) -> bool {
        self.reader
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn convert_error(err: reqwest::Error) -> StreamError {
        if err.is_connect() || err.is_timeout() || err.is_builder() {
            StreamError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            StreamError::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Deliver `item` to every sink registered at the time of the call.
async fn broadcast(sinks: &Mutex<Vec<EventSink>>, item: StreamItem) {
    // Clone the senders so the lock is not held across a full channel.
    let targets: Vec<EventSink> = sinks.lock().await.clone();
    for sink in targets {
        if sink.send(item.clone()).await.is_err() {
            debug!("Dropping item for closed sink");
        }
    }
}

async fn read_body(response: reqwest::Response, sinks: Arc<Mutex<Vec<EventSink>>>) {
    let mut decoder = StreamDecoder::new();
    let mut body = response.bytes_stream();

    while let Some(chunk) = body.next().await {
        match chunk {
            Ok(bytes) => {
                for item in decoder.feed(&bytes) {
                    broadcast(&sinks, item).await;
                }
            }
            Err(e) => {
                warn!("User stream read failed: {}", e);
                let err = StreamError::Transport {
                    message: e.to_string(),
                };
                broadcast(&sinks, Err(err)).await;
                return;
            }
        }
    }

    if let Some(item) = decoder.finish() {
        broadcast(&sinks, item).await;
    }
    info!("User stream ended");
    broadcast(&sinks, Err(StreamError::Closed)).await;
}

#[async_trait]
impl StreamClient for ReqwestStreamClient {
    async fn register(&self, sink: EventSink) {
        self.sinks.lock().await.push(sink);
    }

    async fn clear_listeners(&self) {
        self.sinks.lock().await.clear();
    }

    async fn open(&self, identity: &AuthIdentity) -> Result<(), StreamError> {
        let response = self
            .client
            .get(&self.url)
            .bearer_auth(&identity.access_token)
            .send()
            .await
            .map_err(Self::convert_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StreamError::HttpStatus { status, message });
        }

        info!("Connected to user stream at {}", self.url);
        let handle = tokio::spawn(read_body(response, self.sinks.clone()));
        if let Some(previous) = self.reader.lock().await.replace(handle) {
            previous.abort();
        }
        Ok(())
    }

    async fn close(&self) {
        if let Some(handle) = self.reader.lock().await.take() {
            handle.abort();
            debug!("User stream reader stopped");
        }
    }
}
