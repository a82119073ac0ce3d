//! Chunshua Core - media reference resolution and audio playback sessions.
//!
//! Vocabulary records point at their pronunciation, example-sentence and video
//! media through encrypted references. This crate turns those references into
//! URLs, checks that a URL actually serves audio, and runs playback sessions
//! on a pluggable media engine.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`codec`]: Reference decryption and URL derivation
//! - [`probe`]: HEAD-based accessibility checks
//! - [`media`]: Media engine and handle abstraction
//! - [`services`]: Playback sessions, their registry and callbacks
//! - [`events`]: Playback lifecycle events for observers
//! - [`config`]: Core configuration
//! - [`bootstrap`]: Composition root
//! - [`error`]: Centralized error types
//!
//! # Abstraction Traits
//!
//! The crate defines several traits to decouple core logic from platform-specific
//! implementations:
//!
//! - [`MediaEngine`](media::MediaEngine): Creating playable handles
//! - [`AccessibilityProbe`](probe::AccessibilityProbe): Checking URLs before playback
//! - [`EventEmitter`](events::EventEmitter): Emitting domain events

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod bootstrap;
pub mod codec;
pub mod config;
pub mod error;
pub mod events;
pub mod media;
pub mod probe;
pub mod protocol_constants;
pub mod services;
pub mod utils;

// Re-export commonly used types at the crate root
pub use codec::{CodecError, MediaKind, ReferenceCodec};
pub use config::Config;
pub use error::{ChunshuaError, ChunshuaResult, CodecResult, ErrorCode, ProbeResult};
pub use events::{
    BroadcastEventBridge, EventEmitter, LoggingEventEmitter, NoopEventEmitter, PlaybackEvent,
};
pub use media::{
    CrossOrigin, MediaElement, MediaEngine, MediaEvent, MediaHandle, MediaOptions, PlaybackError,
    Preload,
};
pub use probe::{AccessibilityProbe, HttpProber, ProbeError};
pub use utils::now_millis;

// Re-export service types
pub use services::{AudioPlayer, PlaybackCallbacks, SessionId, SessionInfo, SessionRegistry};

// Re-export bootstrap types
pub use bootstrap::{bootstrap_services, create_http_client, BootstrappedServices};
