//! Event system for playback lifecycle observation.
//!
//! This module provides:
//! - [`EventEmitter`] trait for the player to emit domain events
//! - [`BroadcastEventBridge`] for fan-out to any number of subscribers
//! - [`PlaybackEvent`], the events themselves
//!
//! Events are diagnostics for observers (UI status bars, logs). Callers that
//! started a playback are notified through their own callbacks instead.

mod bridge;
mod emitter;

pub use bridge::BroadcastEventBridge;
pub use emitter::{EventEmitter, LoggingEventEmitter, NoopEventEmitter};

use serde::Serialize;
use uuid::Uuid;

/// Events related to audio playback sessions.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlaybackEvent {
    /// A reference could not be resolved into a URL.
    ResolutionFailed {
        /// Unix timestamp in milliseconds.
        timestamp: u64,
    },
    /// A resolved URL failed the accessibility probe.
    Unreachable {
        url: String,
        /// Unix timestamp in milliseconds.
        timestamp: u64,
    },
    /// A session was registered and its handle asked to play.
    SessionStarted {
        #[serde(rename = "sessionId")]
        session_id: Uuid,
        url: String,
        /// Unix timestamp in milliseconds.
        timestamp: u64,
    },
    /// A session played to the end.
    SessionEnded {
        #[serde(rename = "sessionId")]
        session_id: Uuid,
        /// Unix timestamp in milliseconds.
        timestamp: u64,
    },
    /// A session failed after registration.
    SessionFailed {
        #[serde(rename = "sessionId")]
        session_id: Uuid,
        /// Machine-readable failure code.
        reason: &'static str,
        /// Unix timestamp in milliseconds.
        timestamp: u64,
    },
    /// Stop-all tore down every active session.
    StoppedAll {
        /// Number of registered sessions that were stopped.
        count: usize,
        /// Unix timestamp in milliseconds.
        timestamp: u64,
    },
}
