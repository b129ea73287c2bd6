//! Event loop that owns a [`CatalogueSession`].
//!
//! One task owns the session and processes events strictly in order. Page
//! fetches are spawned onto the runtime and post their completion back into
//! the same queue, so a fetch never mutates state directly. After every event
//! a fresh [`ViewModel`] is published on a watch channel for the rendering
//! layer.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::ListingSource;
use crate::error::SelectionError;
use crate::error::SessionError;
use crate::model::Artwork;

use super::CatalogueSession;
use super::FetchCompletion;
use super::FetchRequest;
use super::ViewModel;

/// Page shown when the session starts.
pub const INITIAL_PAGE: u32 = 1;

/// Events processed by the session loop.
#[derive(Debug)]
pub enum SessionEvent {
    /// The user navigated to another page.
    PageChange(u32),
    /// The widget reported the full selection of the visible page.
    PageSelectionChange(Vec<Artwork>),
    /// Select the first `count` rows of the visible page.
    BulkSelect {
        /// Number of rows.
        count: usize,
        /// Receives the number of newly selected rows.
        reply: oneshot::Sender<Result<usize, SelectionError>>,
    },
    /// A spawned fetch finished.
    FetchCompleted(FetchCompletion),
    /// Stop the loop.
    Shutdown,
}

/// Cloneable entry point into a running session.
///
/// These are the only ways the presentation shell mutates the session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    events: mpsc::UnboundedSender<SessionEvent>,
    view: watch::Receiver<ViewModel>,
}

impl SessionHandle {
    /// Navigate to `page`.
    pub fn page_change(&self, page: u32) -> Result<(), SessionError> {
        self.send(SessionEvent::PageChange(page))
    }

    /// Report the widget's full selection for the visible page.
    pub fn page_selection_change(&self, selected: Vec<Artwork>) -> Result<(), SessionError> {
        self.send(SessionEvent::PageSelectionChange(selected))
    }

    /// Select the first `count` rows of the visible page.
    ///
    /// Resolves once the loop has applied it, with the number of newly
    /// selected rows.
    pub async fn bulk_select(&self, count: usize) -> Result<usize, SessionError> {
        let (reply, response) = oneshot::channel();
        self.send(SessionEvent::BulkSelect { count, reply })?;
        let added = response.await.map_err(|_| SessionError::Closed)??;
        Ok(added)
    }

    /// Latest published snapshot.
    pub fn view(&self) -> ViewModel {
        self.view.borrow().clone()
    }

    /// Subscribe to snapshots.
    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.view.clone()
    }

    /// Ask the loop to stop. In-flight fetches are left to finish and dropped.
    pub fn shutdown(&self) -> Result<(), SessionError> {
        self.send(SessionEvent::Shutdown)
    }

    fn send(&self, event: SessionEvent) -> Result<(), SessionError> {
        self.events.send(event).map_err(|_| SessionError::Closed)
    }
}

/// Owns a [`CatalogueSession`] and drives it from an event queue.
pub struct SessionDriver {
    session: CatalogueSession,
    source: Arc<dyn ListingSource>,
    events_tx: mpsc::WeakUnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    view_tx: watch::Sender<ViewModel>,
}

impl SessionDriver {
    /// Create a driver and the handle that feeds it.
    pub fn new<S: ListingSource + 'static>(source: S) -> (Self, SessionHandle) {
        let session = CatalogueSession::new();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(session.view());

        let driver = Self {
            session,
            source: Arc::new(source),
            events_tx: events_tx.downgrade(),
            events_rx,
            view_tx,
        };
        let handle = SessionHandle {
            events: events_tx,
            view: view_rx,
        };
        (driver, handle)
    }

    /// Create a driver and spawn its loop onto the current runtime.
    pub fn spawn<S: ListingSource + 'static>(
        source: S,
    ) -> (SessionHandle, JoinHandle<CatalogueSession>) {
        let (driver, handle) = Self::new(source);
        (handle, tokio::spawn(driver.run()))
    }

    /// Run until shutdown, or until every handle is dropped and no fetch is
    /// in flight.
    ///
    /// Fetches the initial page first. Returns the final session state.
    pub async fn run(mut self) -> CatalogueSession {
        log::debug!("Session loop started");
        let request = self.session.navigate(INITIAL_PAGE);
        self.spawn_fetch(request);
        self.publish();

        while let Some(event) = self.events_rx.recv().await {
            if !self.handle(event) {
                break;
            }
            self.publish();
        }

        log::debug!("Session loop stopped");
        self.session
    }

    /// Apply one event. Returns `false` when the loop should stop.
    fn handle(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::PageChange(page) => {
                let request = self.session.navigate(page);
                self.spawn_fetch(request);
            }
            SessionEvent::PageSelectionChange(selected) => {
                self.session.page_selection_changed(&selected);
            }
            SessionEvent::BulkSelect { count, reply } => {
                let result = self.session.bulk_select(count);
                if reply.send(result).is_err() {
                    log::debug!("Bulk-select caller went away before the reply");
                }
            }
            SessionEvent::FetchCompleted(completion) => {
                self.session.complete(completion);
            }
            SessionEvent::Shutdown => return false,
        }
        true
    }

    fn spawn_fetch(&self, request: FetchRequest) {
        // Every handle is gone: no one can observe the result.
        let Some(events) = self.events_tx.upgrade() else {
            log::debug!("Skipping fetch of page {}: no session handles left", request.page());
            return;
        };
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let completion = request.run(source.as_ref()).await;
            // Loop already stopped: nothing left to update.
            let _ = events.send(SessionEvent::FetchCompleted(completion));
        });
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.session.view());
    }
}
