//! Event emitter abstraction for decoupling the player from transport.
//!
//! The player depends on the [`EventEmitter`] trait rather than a concrete
//! channel, enabling testing and alternative delivery (UI bridge, logs).

use super::PlaybackEvent;

/// Trait for emitting playback events without knowledge of transport.
///
/// # Example
///
/// ```ignore
/// struct MyService {
///     emitter: Arc<dyn EventEmitter>,
/// }
///
/// impl MyService {
///     fn do_something(&self) {
///         self.emitter.emit_playback(PlaybackEvent::StoppedAll { ... });
///     }
/// }
/// ```
pub trait EventEmitter: Send + Sync {
    /// Emits a playback lifecycle event.
    fn emit_playback(&self, event: PlaybackEvent);
}

/// No-op emitter for headless use or testing.
pub struct NoopEventEmitter;

impl EventEmitter for NoopEventEmitter {
    fn emit_playback(&self, _event: PlaybackEvent) {}
}

/// Logging emitter for debugging and development.
///
/// Logs all events at debug level.
pub struct LoggingEventEmitter;

impl EventEmitter for LoggingEventEmitter {
    fn emit_playback(&self, event: PlaybackEvent) {
        tracing::debug!(?event, "playback_event");
    }
}
