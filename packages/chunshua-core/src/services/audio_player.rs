//! Audio playback service.
//!
//! Responsibilities:
//! - Resolving references into URLs (codec) and checking them (prober)
//! - Creating and registering a media handle per playback
//! - Driving each session until its terminal event and notifying the caller
//! - Tearing every session down on stop-all
//!
//! Within one start call the order is fixed: resolve, probe, create and
//! register, then play. Nothing is registered for a URL that failed to
//! resolve or probe.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::codec::{MediaKind, ReferenceCodec};
use crate::error::ErrorCode;
use crate::events::{EventEmitter, NoopEventEmitter, PlaybackEvent};
use crate::media::{MediaElement, MediaEngine, MediaEvent, MediaHandle, MediaOptions, PlaybackError};
use crate::probe::AccessibilityProbe;
use crate::services::callbacks::PlaybackCallbacks;
use crate::services::session_registry::{SessionId, SessionRegistry};
use crate::utils::now_millis;

/// Starts audio playback from encrypted references and tracks every session.
pub struct AudioPlayer {
    codec: ReferenceCodec,
    prober: Arc<dyn AccessibilityProbe>,
    engine: Arc<dyn MediaEngine>,
    registry: Arc<SessionRegistry>,
    emitter: Arc<dyn EventEmitter>,
    media_options: MediaOptions,
    runtime: tokio::runtime::Handle,
}

impl AudioPlayer {
    /// Creates a player with the default codec, options and a fresh registry.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime context.
    pub fn new(prober: Arc<dyn AccessibilityProbe>, engine: Arc<dyn MediaEngine>) -> Self {
        Self::with_runtime(prober, engine, tokio::runtime::Handle::current())
    }

    /// Creates a player whose session drivers run on `runtime`.
    pub fn with_runtime(
        prober: Arc<dyn AccessibilityProbe>,
        engine: Arc<dyn MediaEngine>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            codec: ReferenceCodec::default(),
            prober,
            engine,
            registry: Arc::new(SessionRegistry::new()),
            emitter: Arc::new(NoopEventEmitter),
            media_options: MediaOptions::default(),
            runtime,
        }
    }

    #[must_use]
    pub fn with_codec(mut self, codec: ReferenceCodec) -> Self {
        self.codec = codec;
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: Arc<SessionRegistry>) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_emitter(mut self, emitter: Arc<dyn EventEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    #[must_use]
    pub fn with_media_options(mut self, options: MediaOptions) -> Self {
        self.media_options = options;
        self
    }

    /// The registry holding this player's active sessions.
    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// Number of sessions between start and their terminal event.
    pub fn active_sessions(&self) -> usize {
        self.registry.len()
    }

    /// Plays the word pronunciation behind `reference`.
    ///
    /// Returns once the session is registered (or has failed to start); the
    /// outcome is reported through `callbacks`.
    pub async fn start_word_playback(&self, reference: &str, callbacks: PlaybackCallbacks) {
        self.start(reference, MediaKind::Word, callbacks).await;
    }

    /// Plays the audio of the example sentence at `example_index`.
    pub async fn start_example_playback(
        &self,
        reference: &str,
        example_index: u32,
        callbacks: PlaybackCallbacks,
    ) {
        self.start(reference, MediaKind::Example(example_index), callbacks)
            .await;
    }

    /// Silences every handle on the media surface and empties the registry.
    ///
    /// Handles the engine knows about but the registry never created are
    /// paused and rewound as well. Force-stopped sessions fire no callbacks.
    /// A start call still probing when this runs is not affected.
    ///
    /// Returns the number of registered sessions that were stopped.
    pub fn stop_all(&self) -> usize {
        for handle in self.engine.ambient_handles() {
            halt(handle.as_ref());
        }

        let drained = self.registry.drain();
        for session in &drained {
            halt(session.handle.as_ref());
            session.cancel.cancel();
        }

        if !drained.is_empty() {
            log::info!("[Player] Stopped {} active session(s)", drained.len());
        }
        self.emitter.emit_playback(PlaybackEvent::StoppedAll {
            count: drained.len(),
            timestamp: now_millis(),
        });
        drained.len()
    }

    async fn start(&self, reference: &str, kind: MediaKind, callbacks: PlaybackCallbacks) {
        let Some(url) = self.codec.resolve(reference, kind) else {
            log::error!("[Player] Could not decrypt {} audio reference", kind_label(kind));
            self.emitter.emit_playback(PlaybackEvent::ResolutionFailed {
                timestamp: now_millis(),
            });
            callbacks.failed();
            return;
        };

        if !self.prober.probe(&url).await {
            log::error!(
                "[Player] {} audio not accessible: {}",
                kind_label(kind),
                url
            );
            self.emitter.emit_playback(PlaybackEvent::Unreachable {
                url,
                timestamp: now_millis(),
            });
            callbacks.failed();
            return;
        }

        let MediaElement { handle, events } = self.engine.create(&url, &self.media_options);
        let (session_id, cancel) = self.registry.register(&url, Arc::clone(&handle));

        log::info!(
            "[Player] Session {} started for {} audio: {}",
            session_id,
            kind_label(kind),
            url
        );
        self.emitter.emit_playback(PlaybackEvent::SessionStarted {
            session_id,
            url: url.clone(),
            timestamp: now_millis(),
        });

        let driver = SessionDriver {
            session_id,
            url,
            handle,
            events,
            cancel,
            callbacks,
            registry: Arc::clone(&self.registry),
            emitter: Arc::clone(&self.emitter),
        };
        self.runtime.spawn(driver.run());
    }
}

fn halt(handle: &dyn MediaHandle) {
    handle.pause();
    handle.reset();
}

fn kind_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Word => "word",
        MediaKind::Example(_) => "example",
        MediaKind::Video => "video",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session Driver
// ─────────────────────────────────────────────────────────────────────────────

enum Outcome {
    Ended,
    Failed(PlaybackError),
    ForceStopped,
}

/// Owns one registered session until its terminal event.
struct SessionDriver {
    session_id: SessionId,
    url: String,
    handle: Arc<dyn MediaHandle>,
    events: mpsc::UnboundedReceiver<MediaEvent>,
    cancel: CancellationToken,
    callbacks: PlaybackCallbacks,
    registry: Arc<SessionRegistry>,
    emitter: Arc<dyn EventEmitter>,
}

impl SessionDriver {
    async fn run(mut self) {
        let handle = Arc::clone(&self.handle);
        let play = handle.play();
        tokio::pin!(play);
        let mut play_settled = false;

        let outcome = loop {
            tokio::select! {
                biased;

                _ = self.cancel.cancelled() => break Outcome::ForceStopped,

                result = &mut play, if !play_settled => {
                    play_settled = true;
                    if let Err(e) = result {
                        break Outcome::Failed(e);
                    }
                }

                event = self.events.recv() => match event {
                    Some(MediaEvent::Playing) => self.callbacks.started(),
                    Some(MediaEvent::Ended) => break Outcome::Ended,
                    Some(MediaEvent::Error(e)) => break Outcome::Failed(e),
                    None => break Outcome::Failed(PlaybackError::EngineGone),
                },
            }
        };

        self.finish(outcome);
    }

    fn finish(self, outcome: Outcome) {
        // Deregistration gates the callback. A session already drained by
        // stop-all stays silent.
        if matches!(outcome, Outcome::ForceStopped) || !self.registry.deregister(&self.session_id)
        {
            log::debug!("[Player] Session {} force-stopped", self.session_id);
            return;
        }

        match outcome {
            Outcome::Ended => {
                log::debug!("[Player] Session {} ended", self.session_id);
                self.emitter.emit_playback(PlaybackEvent::SessionEnded {
                    session_id: self.session_id,
                    timestamp: now_millis(),
                });
                self.callbacks.ended();
            }
            Outcome::Failed(e) => {
                log::error!(
                    "[Player] Session {} failed ({}): {} - url: {}",
                    self.session_id,
                    e.code(),
                    e,
                    self.url
                );
                self.emitter.emit_playback(PlaybackEvent::SessionFailed {
                    session_id: self.session_id,
                    reason: e.code(),
                    timestamp: now_millis(),
                });
                self.callbacks.failed();
            }
            Outcome::ForceStopped => {}
        }
    }
}
