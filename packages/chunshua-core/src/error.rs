//! Centralized error types for the Chunshua core library.
//!
//! Component errors (`CodecError`, `ProbeError`, `PlaybackError`) live next to
//! the code that raises them and never cross a component boundary: they are
//! absorbed into `None`, `false` or an `on_error` notification. This module
//! gives them machine-readable codes for logs and events, and defines the
//! application-level [`ChunshuaError`] used by bootstrap and binaries.

use serde::Serialize;
use thiserror::Error;

use crate::codec::CodecError;
use crate::media::PlaybackError;
use crate::probe::ProbeError;

/// Trait for error types that provide machine-readable error codes.
pub trait ErrorCode {
    /// Returns a machine-readable error code for logs and events.
    fn code(&self) -> &'static str;
}

impl ErrorCode for CodecError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidBase64(_) => "invalid_base64",
            Self::Decrypt => "decrypt_failed",
            Self::InvalidUtf8 => "invalid_utf8",
            Self::MissingPrefix => "missing_prefix",
            Self::MissingSuffix => "missing_suffix",
            Self::EmptyUrl => "empty_url",
        }
    }
}

impl ErrorCode for ProbeError {
    fn code(&self) -> &'static str {
        match self {
            Self::Http(_) => "http_request_failed",
            Self::Status(_) => "http_error_status",
            Self::NotAudio(_) => "not_audio",
        }
    }
}

impl ErrorCode for PlaybackError {
    fn code(&self) -> &'static str {
        match self {
            Self::Unsupported(_) => "format_unsupported",
            Self::Decode(_) => "decode_failed",
            Self::Rejected(_) => "play_rejected",
            Self::EngineGone => "engine_gone",
        }
    }
}

/// Application-wide error type.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ChunshuaError {
    /// A reference could not be turned into a URL.
    #[error("Unresolvable reference: {0}")]
    Unresolvable(String),

    /// A resolved URL failed the accessibility probe.
    #[error("Resource not accessible: {0}")]
    NotAccessible(String),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client or other infrastructure failed to initialize.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChunshuaError {
    /// Returns a machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unresolvable(_) => "unresolvable_reference",
            Self::NotAccessible(_) => "not_accessible",
            Self::Configuration(_) => "configuration_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

// Re-export Result type aliases from their defining modules
pub use crate::codec::CodecResult;
pub use crate::probe::ProbeResult;

/// Convenient Result alias for application-wide operations.
pub type ChunshuaResult<T> = Result<T, ChunshuaError>;

impl From<CodecError> for ChunshuaError {
    fn from(err: CodecError) -> Self {
        Self::Unresolvable(err.to_string())
    }
}

impl From<ProbeError> for ChunshuaError {
    fn from(err: ProbeError) -> Self {
        Self::NotAccessible(err.to_string())
    }
}
