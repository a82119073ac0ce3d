//! Media surface abstraction.
//!
//! The playback registry does not talk to an audio device directly. It asks a
//! [`MediaEngine`] for playable handles and listens to their [`MediaEvent`]s.
//! A browser build backs this with `<audio>` elements; tests use a scripted
//! in-memory engine.

#[cfg(test)]
pub(crate) mod scripted;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Failures reported by the playback engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// The engine cannot play this format.
    #[error("Format not supported: {0}")]
    Unsupported(String),

    /// The media could not be decoded.
    #[error("Decode failed: {0}")]
    Decode(String),

    /// The engine refused to start playback (autoplay policy, etc.).
    #[error("Play rejected: {0}")]
    Rejected(String),

    /// The engine dropped the handle without a terminal event.
    #[error("Engine released the handle without finishing playback")]
    EngineGone,
}

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// How much of the resource the engine should fetch before `play()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preload {
    /// Nothing until playback is requested.
    None,
    /// Only metadata (duration, codec).
    #[default]
    Metadata,
    /// Whatever the engine sees fit.
    Auto,
}

/// Credentials mode for cross-origin fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossOrigin {
    /// Cross-origin fetch without credentials.
    #[default]
    Anonymous,
    /// Cross-origin fetch with credentials.
    UseCredentials,
}

/// Options applied to every handle created for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaOptions {
    pub preload: Preload,
    pub cross_origin: CrossOrigin,
}

// ─────────────────────────────────────────────────────────────────────────────
// Events and Handles
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle notifications emitted by a handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback actually began.
    Playing,
    /// Playback reached the end of the media.
    Ended,
    /// Playback failed after it was requested.
    Error(PlaybackError),
}

/// One playable media resource.
#[async_trait]
pub trait MediaHandle: Send + Sync {
    /// The URL this handle plays.
    fn url(&self) -> &str;

    /// Requests playback. Resolves once the engine accepted or rejected the
    /// request; later failures arrive as [`MediaEvent::Error`].
    async fn play(&self) -> Result<(), PlaybackError>;

    /// Pauses playback. No-op if not playing.
    fn pause(&self);

    /// Rewinds to the start.
    fn reset(&self);
}

/// A freshly created handle together with its event stream.
///
/// The receiver exists before `play()` is attempted, so no event is lost.
pub struct MediaElement {
    pub handle: Arc<dyn MediaHandle>,
    pub events: mpsc::UnboundedReceiver<MediaEvent>,
}

/// Creates handles and exposes every handle currently on the media surface.
pub trait MediaEngine: Send + Sync {
    /// Creates a handle for `url`.
    fn create(&self, url: &str, options: &MediaOptions) -> MediaElement;

    /// Every handle the engine knows about, including ones created outside
    /// the playback registry.
    fn ambient_handles(&self) -> Vec<Arc<dyn MediaHandle>>;
}
