//! Fixed protocol constants that should NOT be changed.
//!
//! These values are shared with the service that produces encrypted media
//! references. Changing any of them breaks decryption of every reference
//! already stored in the vocabulary data.

// ─────────────────────────────────────────────────────────────────────────────
// Reference Cipher (AES-128-CBC, PKCS#7)
// ─────────────────────────────────────────────────────────────────────────────

/// Symmetric key used to decrypt media references (16 bytes, UTF-8).
pub const REFERENCE_KEY: &[u8; 16] = b"thisIsASecretKey";

/// Initialization vector used to decrypt media references (16 bytes, UTF-8).
pub const REFERENCE_IV: &[u8; 16] = b"RandomInitVector";

/// Marker that must open every decrypted plaintext.
pub const REFERENCE_PREFIX: &str = "chun";

/// Marker that must close every decrypted plaintext.
pub const REFERENCE_SUFFIX: &str = "shua";

// ─────────────────────────────────────────────────────────────────────────────
// Media URLs
// ─────────────────────────────────────────────────────────────────────────────

/// Extension of word audio files. Example-sentence variants are derived by
/// inserting `_<index>` right before it.
pub const AUDIO_EXTENSION: &str = ".mp3";

/// Substring a probe response's `Content-Type` must contain to count as audio.
pub const AUDIO_CONTENT_MARKER: &str = "audio";
