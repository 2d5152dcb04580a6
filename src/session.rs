//! Per-account streaming session.
//!
//! A session owns one worker task. Start and stop requests, and every item
//! the stream client delivers, are handled on that task one at a time, so
//! store mutations for an account happen in arrival order.

use std::fmt;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::models::Account;
use crate::reconciler::{ReconcileOutcome, StreamReconciler};
use crate::stream::{StreamEvent, StreamItem};
use crate::traits::{LocalStore, StreamClient};

/// Default capacity of the event channel between client and worker.
pub const DEFAULT_EVENT_BUFFER: usize = 256;

/// Lifecycle of a session as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Spawned, stream not open yet (or the last open failed).
    Idle,
    /// The stream client accepted `open`.
    Streaming,
    /// The worker has exited.
    Stopped,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Events that changed the store (or tried to and matched nothing).
    pub handled: u64,
    /// Events of a kind with no local effect.
    pub ignored: u64,
    /// Favorite events from other users.
    pub skipped: u64,
    /// Events whose store calls failed.
    pub failed: u64,
    /// Stream exceptions delivered by the client.
    pub stream_errors: u64,
}

impl SessionStats {
    fn record(&mut self, outcome: &ReconcileOutcome) {
        match outcome {
            ReconcileOutcome::Ignored(_) => self.ignored += 1,
            ReconcileOutcome::NotOwnAction { .. } => self.skipped += 1,
            _ => self.handled += 1,
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} handled, {} ignored, {} skipped, {} failed, {} stream errors",
            self.handled, self.ignored, self.skipped, self.failed, self.stream_errors
        )
    }
}

enum SessionCommand {
    Start,
    Stop,
}

/// Handle to a running session.
pub struct StreamSession {
    commands: mpsc::UnboundedSender<SessionCommand>,
    state: watch::Receiver<SessionState>,
    worker: JoinHandle<SessionStats>,
}

impl StreamSession {
    /// Spawn the worker for `account`. Nothing is opened until [`start`].
    ///
    /// [`start`]: StreamSession::start
    pub fn spawn<C, S>(
        account: Arc<Account>,
        client: Arc<C>,
        store: Arc<S>,
        event_buffer: usize,
    ) -> Self
    where
        C: StreamClient + ?Sized + 'static,
        S: LocalStore + ?Sized + 'static,
    {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::channel(event_buffer.max(1));
        let (state_tx, state_rx) = watch::channel(SessionState::Idle);

        let worker = SessionWorker {
            reconciler: StreamReconciler::new(account.clone(), store),
            account,
            client,
            commands: commands_rx,
            events_tx,
            events: events_rx,
            state: state_tx,
            stats: SessionStats::default(),
        };

        Self {
            commands: commands_tx,
            state: state_rx,
            worker: tokio::spawn(worker.run()),
        }
    }

    /// Register with the stream client and open the stream. Returns at once.
    pub fn start(&self) {
        if self.commands.send(SessionCommand::Start).is_err() {
            debug!("Start requested on a stopped session");
        }
    }

    /// Deregister, close the stream and let the worker finish what it has
    /// already received. Returns at once.
    pub fn stop(&self) {
        if self.commands.send(SessionCommand::Stop).is_err() {
            debug!("Stop requested on a stopped session");
        }
    }

    pub fn state(&self) -> watch::Receiver<SessionState> {
        self.state.clone()
    }

    /// Wait for the worker to exit and return its counters.
    pub async fn join(self) -> SessionStats {
        match self.worker.await {
            Ok(stats) => stats,
            Err(e) => {
                error!("Session worker terminated abnormally: {}", e);
                SessionStats::default()
            }
        }
    }
}

struct SessionWorker<C: ?Sized, S: LocalStore + ?Sized> {
    account: Arc<Account>,
    client: Arc<C>,
    reconciler: StreamReconciler<S>,
    commands: mpsc::UnboundedReceiver<SessionCommand>,
    // Kept so every Start can hand the client a fresh sender.
    events_tx: mpsc::Sender<StreamItem>,
    events: mpsc::Receiver<StreamItem>,
    state: watch::Sender<SessionState>,
    stats: SessionStats,
}

impl<C, S> SessionWorker<C, S>
where
    C: StreamClient + ?Sized,
    S: LocalStore + ?Sized,
{
    async fn run(mut self) -> SessionStats {
        info!(
            "Session started for @{} (account {})",
            self.account.screen_name(),
            self.account.id()
        );

        loop {
            tokio::select! {
                biased;

                command = self.commands.recv() => match command {
                    Some(SessionCommand::Start) => self.open().await,
                    Some(SessionCommand::Stop) | None => break,
                },
                Some(item) = self.events.recv() => self.handle(item).await,
            }
        }

        self.shutdown().await;
        self.stats
    }

    async fn open(&mut self) {
        self.client.register(self.events_tx.clone()).await;
        match self.client.open(self.account.identity()).await {
            Ok(()) => {
                info!("Streaming for account {}", self.account.id());
                self.state.send_replace(SessionState::Streaming);
            }
            Err(e) => {
                error!(
                    code = e.error_code(),
                    "Failed to open stream for account {}: {}",
                    self.account.id(),
                    e
                );
                self.stats.stream_errors += 1;
            }
        }
    }

    async fn handle(&mut self, item: StreamItem) {
        match item {
            Ok(event) => self.apply(event).await,
            Err(e) => {
                warn!(code = e.error_code(), "Stream exception: {}", e);
                self.stats.stream_errors += 1;
            }
        }
    }

    async fn apply(&mut self, event: StreamEvent) {
        match self.reconciler.apply(&event).await {
            Ok(outcome) => self.stats.record(&outcome),
            Err(e) => {
                error!(
                    event = event.event_type_name(),
                    code = e.error_code(),
                    "Failed to apply stream event: {}",
                    e
                );
                self.stats.failed += 1;
            }
        }
    }

    async fn shutdown(&mut self) {
        self.client.clear_listeners().await;
        self.client.close().await;

        // Finish whatever was delivered before the client let go of us.
        while let Ok(item) = self.events.try_recv() {
            self.handle(item).await;
        }

        self.state.send_replace(SessionState::Stopped);
        info!(
            "Session stopped for account {}: {}",
            self.account.id(),
            self.stats
        );
    }
}
