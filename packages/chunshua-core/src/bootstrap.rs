//! Application bootstrap and dependency wiring.
//!
//! This module contains the composition root - the single place where all
//! services are instantiated and wired together. The media engine is the one
//! dependency supplied by the caller, since it depends on the platform.

use std::sync::Arc;

use reqwest::Client;

use crate::codec::ReferenceCodec;
use crate::config::Config;
use crate::error::{ChunshuaError, ChunshuaResult};
use crate::events::{BroadcastEventBridge, EventEmitter};
use crate::media::MediaEngine;
use crate::probe::{AccessibilityProbe, HttpProber};
use crate::services::{AudioPlayer, SessionRegistry};

/// Container for all bootstrapped services.
#[derive(Clone)]
pub struct BootstrappedServices {
    /// Starts and stops playback sessions.
    pub player: Arc<AudioPlayer>,
    /// Decrypts media references.
    pub codec: ReferenceCodec,
    /// HEAD-based accessibility prober used by the player.
    pub prober: Arc<HttpProber>,
    /// Active playback sessions.
    pub registry: Arc<SessionRegistry>,
    /// Event bridge for playback lifecycle observers.
    pub event_bridge: Arc<BroadcastEventBridge>,
    /// Shared HTTP client for connection pooling.
    http_client: Client,
}

impl BootstrappedServices {
    /// Returns the shared HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Stops every active session.
    pub fn shutdown(&self) {
        log::info!("[Bootstrap] Beginning shutdown...");
        let stopped = self.player.stop_all();
        log::info!("[Bootstrap] Stopped {} session(s)", stopped);
    }
}

/// Creates the shared HTTP client used for probing.
///
/// No request timeout is configured; probes rely on the transport's own
/// failure behavior.
///
/// # Errors
///
/// Returns [`ChunshuaError::Internal`] if the TLS backend fails to initialize.
pub fn create_http_client(config: &Config) -> ChunshuaResult<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| ChunshuaError::Internal(format!("Failed to create HTTP client: {}", e)))
}

/// Bootstraps the playback services with their dependencies.
///
/// Services are created in dependency order:
///
/// 1. Shared infrastructure (HTTP client, event bridge)
/// 2. Prober (depends on HTTP client)
/// 3. Registry
/// 4. Player (depends on prober, engine, registry, event bridge)
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the HTTP client cannot
/// be built, or no Tokio runtime is current.
pub fn bootstrap_services(
    config: &Config,
    engine: Arc<dyn MediaEngine>,
) -> ChunshuaResult<BootstrappedServices> {
    config.validate().map_err(ChunshuaError::Configuration)?;
    let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
        ChunshuaError::Internal(format!("No Tokio runtime for session drivers: {}", e))
    })?;

    let http_client = create_http_client(config)?;
    let event_bridge = Arc::new(BroadcastEventBridge::new(config.event_channel_capacity));

    let prober = Arc::new(HttpProber::new(http_client.clone()));
    let registry = Arc::new(SessionRegistry::new());
    let codec = ReferenceCodec::default();

    let player = Arc::new(
        AudioPlayer::with_runtime(
            Arc::clone(&prober) as Arc<dyn AccessibilityProbe>,
            engine,
            runtime,
        )
        .with_codec(codec.clone())
        .with_registry(Arc::clone(&registry))
        .with_emitter(Arc::clone(&event_bridge) as Arc<dyn EventEmitter>)
        .with_media_options(config.media),
    );

    log::debug!("[Bootstrap] Playback services ready");

    Ok(BootstrappedServices {
        player,
        codec,
        prober,
        registry,
        event_bridge,
        http_client,
    })
}
