//! Registry of active playback sessions.
//!
//! A session is a member from the moment its handle is registered until its
//! terminal event (end, error, stop-all), and not a moment longer. Every
//! mutation is a single synchronous map operation, so concurrent start calls
//! never observe a half-applied update.

use std::sync::Arc;

use dashmap::DashMap;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::media::MediaHandle;
use crate::utils::now_millis;

/// Identifier of one playback session.
pub type SessionId = Uuid;

/// A registered session: its handle plus the token that silences its driver.
#[derive(Clone)]
pub(crate) struct ActiveSession {
    pub url: String,
    pub handle: Arc<dyn MediaHandle>,
    pub cancel: CancellationToken,
    pub started_at: u64,
}

/// Read-only view of an active session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: SessionId,
    pub url: String,
    /// Unix timestamp in milliseconds.
    pub started_at: u64,
}

/// The set of currently active playback sessions.
///
/// Constructed explicitly and shared through `Arc`; there is no global
/// instance.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, ActiveSession>,
}

impl SessionRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handle and returns its session id and cancellation token.
    pub(crate) fn register(
        &self,
        url: &str,
        handle: Arc<dyn MediaHandle>,
    ) -> (SessionId, CancellationToken) {
        let id = Uuid::new_v4();
        let cancel = CancellationToken::new();
        self.sessions.insert(
            id,
            ActiveSession {
                url: url.to_string(),
                handle,
                cancel: cancel.clone(),
                started_at: now_millis(),
            },
        );
        (id, cancel)
    }

    /// Removes a session.
    ///
    /// Returns `true` only for the call that actually removed it; later calls
    /// for the same id (or calls after a drain) return `false`.
    pub(crate) fn deregister(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Removes and returns every session registered at the time of the call.
    pub(crate) fn drain(&self) -> Vec<ActiveSession> {
        let ids: Vec<SessionId> = self.sessions.iter().map(|r| *r.key()).collect();

        let mut removed = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some((_, session)) = self.sessions.remove(&id) {
                removed.push(session);
            }
        }
        removed
    }

    /// Checks whether a session is still active.
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    /// Number of active sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no session is active.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Snapshot of every active session.
    pub fn snapshot(&self) -> Vec<SessionInfo> {
        self.sessions
            .iter()
            .map(|r| SessionInfo {
                session_id: *r.key(),
                url: r.value().url.clone(),
                started_at: r.value().started_at,
            })
            .collect()
    }
}
