//! Bridge implementation that maps playback events to a broadcast channel.
//!
//! The [`BroadcastEventBridge`] lives at the boundary between the player and
//! whatever observes it (a UI status line, a debug console).

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use super::emitter::EventEmitter;
use super::PlaybackEvent;

/// Bridges playback events to a `tokio::sync::broadcast` channel.
///
/// Also forwards to an optional external emitter that can be set after
/// construction, for platform-specific delivery.
#[derive(Clone)]
pub struct BroadcastEventBridge {
    tx: broadcast::Sender<PlaybackEvent>,
    /// Optional external emitter for platform-specific event delivery
    external_emitter: Arc<RwLock<Option<Arc<dyn EventEmitter>>>>,
}

impl BroadcastEventBridge {
    /// Creates a new bridge with the given channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 (see [`broadcast::channel`]).
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            external_emitter: Arc::new(RwLock::new(None)),
        }
    }

    /// Sets an external emitter that receives every event before broadcast.
    pub fn set_external_emitter(&self, emitter: Arc<dyn EventEmitter>) {
        *self.external_emitter.write() = Some(emitter);
    }

    /// Returns a new receiver for the broadcast channel.
    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.tx.subscribe()
    }
}

impl EventEmitter for BroadcastEventBridge {
    fn emit_playback(&self, event: PlaybackEvent) {
        if let Some(ref emitter) = *self.external_emitter.read() {
            emitter.emit_playback(event.clone());
        }
        if let Err(e) = self.tx.send(event) {
            log::trace!("[EventBridge] No broadcast receivers: {}", e);
        }
    }
}
