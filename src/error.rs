//! Error types for Omni-Genesis
//!
//! The scoring core is total; only configuration, lexicon loading and the
//! HTTP/chat surface can fail.

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, OmniError>;

#[derive(Error, Debug)]
pub enum OmniError {
    #[error("invalid phi {0}: must be finite and greater than 1")]
    InvalidPhi(f64),

    #[error("invalid balance threshold {0}: must be finite and non-negative")]
    InvalidThreshold(f64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("lexicon error: {0}")]
    Lexicon(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unprocessable request body: {0}")]
    UnprocessableBody(String),

    #[error("no chat session for user {0}")]
    SessionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
