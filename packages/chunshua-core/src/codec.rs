//! Media reference decryption and URL derivation.
//!
//! Vocabulary, example and video records carry their media locations as
//! opaque references: Base64 of an AES-128-CBC (PKCS#7) ciphertext whose
//! plaintext is the URL framed by [`REFERENCE_PREFIX`] and
//! [`REFERENCE_SUFFIX`]. This module only decrypts; references are produced
//! elsewhere.
//!
//! The public resolution operations return `Option`. Cryptographic failures
//! and framing failures collapse into the same `None`, so callers cannot tell
//! them apart. [`ReferenceCodec::try_decrypt`] keeps the distinction for
//! diagnostics.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ErrorCode;
use crate::protocol_constants::{
    AUDIO_EXTENSION, REFERENCE_IV, REFERENCE_KEY, REFERENCE_PREFIX, REFERENCE_SUFFIX,
};

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Standard alphabet; trailing `=` padding may be present or missing.
const REFERENCE_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Reasons a reference failed to decrypt into a URL.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The reference is not valid Base64.
    #[error("Reference is not valid Base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Block decryption or PKCS#7 unpadding failed.
    #[error("Reference could not be decrypted (bad key, IV or padding)")]
    Decrypt,

    /// The decrypted bytes are not UTF-8.
    #[error("Decrypted reference is not valid UTF-8")]
    InvalidUtf8,

    /// The plaintext does not start with the framing prefix.
    #[error("Decrypted reference is missing the framing prefix")]
    MissingPrefix,

    /// The plaintext does not end with the framing suffix.
    #[error("Decrypted reference is missing the framing suffix")]
    MissingSuffix,

    /// Framing is intact but encloses nothing.
    #[error("Decrypted reference contains an empty URL")]
    EmptyUrl,
}

/// Convenient Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

// ─────────────────────────────────────────────────────────────────────────────
// Media Kind
// ─────────────────────────────────────────────────────────────────────────────

/// Which kind of media a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum MediaKind {
    /// Word pronunciation audio.
    Word,
    /// Example-sentence audio, derived from the word audio URL.
    Example(u32),
    /// Instructional video.
    Video,
}

// ─────────────────────────────────────────────────────────────────────────────
// Codec
// ─────────────────────────────────────────────────────────────────────────────

/// Decrypts media references into URLs.
#[derive(Clone)]
pub struct ReferenceCodec {
    key: [u8; 16],
    iv: [u8; 16],
}

impl Default for ReferenceCodec {
    fn default() -> Self {
        Self::new(*REFERENCE_KEY, *REFERENCE_IV)
    }
}

impl std::fmt::Debug for ReferenceCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceCodec").finish_non_exhaustive()
    }
}

impl ReferenceCodec {
    /// Creates a codec with an explicit key and IV.
    #[must_use]
    pub fn new(key: [u8; 16], iv: [u8; 16]) -> Self {
        Self { key, iv }
    }

    /// Decrypts a reference, reporting why it failed.
    ///
    /// Leading and trailing whitespace around the reference is ignored. The
    /// embedded URL is returned verbatim, scheme included.
    pub fn try_decrypt(&self, reference: &str) -> CodecResult<String> {
        let mut buf = REFERENCE_BASE64.decode(reference.trim())?;
        let plaintext = Aes128CbcDec::new(&self.key.into(), &self.iv.into())
            .decrypt_padded_mut::<Pkcs7>(&mut buf)
            .map_err(|_| CodecError::Decrypt)?;
        let plaintext = std::str::from_utf8(plaintext).map_err(|_| CodecError::InvalidUtf8)?;

        let framed = plaintext
            .strip_prefix(REFERENCE_PREFIX)
            .ok_or(CodecError::MissingPrefix)?;
        let url = framed
            .strip_suffix(REFERENCE_SUFFIX)
            .ok_or(CodecError::MissingSuffix)?;

        if url.is_empty() {
            return Err(CodecError::EmptyUrl);
        }
        Ok(url.to_string())
    }

    /// Decrypts a reference into a URL, or `None` on any failure.
    pub fn decrypt(&self, reference: &str) -> Option<String> {
        match self.try_decrypt(reference) {
            Ok(url) => Some(url),
            Err(e) => {
                log::debug!("[Codec] Reference rejected ({}): {}", e.code(), e);
                None
            }
        }
    }

    /// Resolves a word pronunciation reference.
    pub fn derive_word_url(&self, reference: &str) -> Option<String> {
        self.decrypt(reference)
    }

    /// Resolves the audio URL of the example sentence at `example_index`.
    ///
    /// The word audio URL `.../foo.mp3` becomes `.../foo_<index>.mp3`. A base
    /// URL without the `.mp3` extension is returned unchanged.
    pub fn derive_example_url(&self, reference: &str, example_index: u32) -> Option<String> {
        let base = self.decrypt(reference)?;
        Some(example_variant(&base, example_index))
    }

    /// Resolves a video reference.
    pub fn derive_video_url(&self, reference: &str) -> Option<String> {
        self.decrypt(reference)
    }

    /// Resolves a reference for the given kind of media.
    pub fn resolve(&self, reference: &str, kind: MediaKind) -> Option<String> {
        match kind {
            MediaKind::Word => self.derive_word_url(reference),
            MediaKind::Example(index) => self.derive_example_url(reference, index),
            MediaKind::Video => self.derive_video_url(reference),
        }
    }
}

fn example_variant(base: &str, example_index: u32) -> String {
    match base.strip_suffix(AUDIO_EXTENSION) {
        Some(stem) => format!("{stem}_{example_index}{AUDIO_EXTENSION}"),
        None => {
            log::warn!(
                "[Codec] Base URL has no {} extension, using it as-is: {}",
                AUDIO_EXTENSION,
                base
            );
            base.to_string()
        }
    }
}
