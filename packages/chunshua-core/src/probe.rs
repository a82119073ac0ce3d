//! Accessibility probing for resolved media URLs.
//!
//! Before a handle is created for a URL, a single metadata-only `HEAD` request
//! checks that the resource exists and is served as audio. The verdict is a
//! snapshot: the resource may disappear between probe and playback.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use thiserror::Error;

use crate::error::ErrorCode;
use crate::protocol_constants::AUDIO_CONTENT_MARKER;

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Reasons a URL failed the accessibility probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error status {0}")]
    Status(u16),

    /// The declared content type is not audio.
    #[error("Content type is not audio: {0:?}")]
    NotAudio(String),
}

/// Convenient Result alias for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

// ─────────────────────────────────────────────────────────────────────────────
// Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Checks whether a URL is currently reachable and serves audio.
///
/// Implementations never fail: every problem becomes `false`.
#[async_trait]
pub trait AccessibilityProbe: Send + Sync {
    /// Returns `true` iff the resource answered with success and an audio type.
    async fn probe(&self, url: &str) -> bool;
}

/// Returns `true` if a `Content-Type` header value declares audio.
#[must_use]
pub fn is_audio_content_type(content_type: &str) -> bool {
    content_type.contains(AUDIO_CONTENT_MARKER)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Probes URLs with a single `HEAD` request. No retries.
#[derive(Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Creates a prober sharing the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Probes `url` and reports why it is not accessible.
    pub async fn probe_detailed(&self, url: &str) -> ProbeResult<()> {
        let res = self.client.head(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ProbeError::Status(status.as_u16()));
        }

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if !is_audio_content_type(content_type) {
            return Err(ProbeError::NotAudio(content_type.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl AccessibilityProbe for HttpProber {
    async fn probe(&self, url: &str) -> bool {
        match self.probe_detailed(url).await {
            Ok(()) => {
                log::debug!("[Probe] {} is accessible", url);
                true
            }
            Err(e) => {
                log::debug!("[Probe] {} not accessible ({}): {}", url, e.code(), e);
                false
            }
        }
    }
}
