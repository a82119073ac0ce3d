//! Core configuration.
//!
//! [`Config`] holds everything the composition root needs to build the
//! playback services. Binaries load it from their own formats and hand it to
//! [`bootstrap_services`](crate::bootstrap::bootstrap_services).

use serde::{Deserialize, Serialize};

use crate::media::MediaOptions;

/// Default `User-Agent` sent with probe requests.
pub const DEFAULT_USER_AGENT: &str = concat!("chunshua/", env!("CARGO_PKG_VERSION"));

/// Configuration for the Chunshua playback core.
///
/// All fields have sensible defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Options applied to every media handle the player creates.
    pub media: MediaOptions,

    /// `User-Agent` header for the shared HTTP client.
    pub user_agent: String,

    /// Capacity of the playback event broadcast channel.
    pub event_channel_capacity: usize,
}

impl Config {
    /// Validates the configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        if self.event_channel_capacity == 0 {
            return Err(
                "event_channel_capacity must be >= 1 (broadcast::channel panics on 0)"
                    .to_string(),
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            media: MediaOptions::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            event_channel_capacity: 100,
        }
    }
}
