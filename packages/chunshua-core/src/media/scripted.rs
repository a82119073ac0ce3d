//! Scripted in-memory media engine for tests.
//!
//! Handles record pause/reset calls and let the test drive lifecycle events.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::{MediaElement, MediaEngine, MediaEvent, MediaHandle, MediaOptions, PlaybackError};

/// What `play()` does on handles created after the outcome is set.
#[derive(Debug, Clone)]
pub(crate) enum PlayOutcome {
    /// Accept and emit [`MediaEvent::Playing`].
    Accept,
    /// Accept without emitting anything.
    AcceptSilently,
    /// Reject the play request.
    Reject(String),
    /// Emit an error event and also reject the play request.
    RejectWithErrorEvent(String),
}

pub(crate) struct ScriptedHandle {
    url: String,
    pub options: MediaOptions,
    outcome: PlayOutcome,
    events_tx: Mutex<Option<mpsc::UnboundedSender<MediaEvent>>>,
    play_calls: AtomicUsize,
    pauses: AtomicUsize,
    resets: AtomicUsize,
}

impl ScriptedHandle {
    fn new(
        url: &str,
        options: MediaOptions,
        outcome: PlayOutcome,
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<MediaEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = Arc::new(Self {
            url: url.to_string(),
            options,
            outcome,
            events_tx: Mutex::new(Some(tx)),
            play_calls: AtomicUsize::new(0),
            pauses: AtomicUsize::new(0),
            resets: AtomicUsize::new(0),
        });
        (handle, rx)
    }

    /// Delivers an event to whoever listens on this handle.
    pub fn emit(&self, event: MediaEvent) {
        if let Some(tx) = self.events_tx.lock().as_ref() {
            let _ = tx.send(event);
        }
    }

    /// Closes the event stream, as an engine that loses the handle would.
    pub fn close_events(&self) {
        self.events_tx.lock().take();
    }

    pub fn play_calls(&self) -> usize {
        self.play_calls.load(Ordering::SeqCst)
    }

    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }

    pub fn resets(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaHandle for ScriptedHandle {
    fn url(&self) -> &str {
        &self.url
    }

    async fn play(&self) -> Result<(), PlaybackError> {
        self.play_calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            PlayOutcome::Accept => {
                self.emit(MediaEvent::Playing);
                Ok(())
            }
            PlayOutcome::AcceptSilently => Ok(()),
            PlayOutcome::Reject(reason) => Err(PlaybackError::Rejected(reason.clone())),
            PlayOutcome::RejectWithErrorEvent(reason) => {
                self.emit(MediaEvent::Error(PlaybackError::Unsupported(reason.clone())));
                Err(PlaybackError::Rejected(reason.clone()))
            }
        }
    }

    fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }

    fn reset(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) struct ScriptedEngine {
    outcome: Mutex<PlayOutcome>,
    created: Mutex<Vec<Arc<ScriptedHandle>>>,
    external: Mutex<Vec<Arc<ScriptedHandle>>>,
}

impl ScriptedEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(PlayOutcome::Accept),
            created: Mutex::new(Vec::new()),
            external: Mutex::new(Vec::new()),
        })
    }

    pub fn set_outcome(&self, outcome: PlayOutcome) {
        *self.outcome.lock() = outcome;
    }

    pub fn created(&self) -> Vec<Arc<ScriptedHandle>> {
        self.created.lock().clone()
    }

    /// The most recently created handle.
    pub fn last(&self) -> Arc<ScriptedHandle> {
        self.created
            .lock()
            .last()
            .cloned()
            .expect("no handle created yet")
    }

    /// Puts a handle on the surface that the registry never created.
    pub fn add_external(&self, url: &str) -> Arc<ScriptedHandle> {
        let (handle, _rx) =
            ScriptedHandle::new(url, MediaOptions::default(), PlayOutcome::AcceptSilently);
        self.external.lock().push(Arc::clone(&handle));
        handle
    }
}

impl MediaEngine for ScriptedEngine {
    fn create(&self, url: &str, options: &MediaOptions) -> MediaElement {
        let outcome = self.outcome.lock().clone();
        let (handle, events) = ScriptedHandle::new(url, *options, outcome);
        self.created.lock().push(Arc::clone(&handle));
        MediaElement { handle, events }
    }

    fn ambient_handles(&self) -> Vec<Arc<dyn MediaHandle>> {
        let created = self.created.lock();
        let external = self.external.lock();
        created
            .iter()
            .chain(external.iter())
            .map(|h| Arc::clone(h) as Arc<dyn MediaHandle>)
            .collect()
    }
}
