//! Application services layer.
//!
//! This module contains the playback services that orchestrate between the
//! reference codec, the accessibility prober and the media engine.

pub mod audio_player;
pub mod callbacks;
pub mod session_registry;

pub use audio_player::AudioPlayer;
pub use callbacks::PlaybackCallbacks;
pub use session_registry::{SessionId, SessionInfo, SessionRegistry};
