//! Error types shared between the share server and client.
//!
//! The `ShareError` enum unifies the failure cases of token decoding, I/O and
//! URL handling, allowing crates to propagate a single error type. Decoding
//! failures are reported through this type only by `codec::try_decode`; the
//! view layer folds them into the invalid state.
use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Unified error type shared by server and client.
#[derive(Error, Debug)]
pub enum ShareError {
    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoded token bytes are not valid UTF-8 text.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] Utf8Error),

    /// Token is not valid base64 (bad alphabet, misplaced padding, truncated, etc.).
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A share link could not be parsed as a URL.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}
