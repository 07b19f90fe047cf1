//! Unified SDK error types.

use thiserror::Error;

/// Message shown to the user for every fetch failure.
pub const NO_CONNECTION_MESSAGE: &str = "No internet connection";

/// Top-level fetch error.
///
/// Both variants are recovered at the fetch boundary and collapse into a single
/// "no connection, try again" state for the user. The inner error keeps the
/// diagnostic for logging.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }

    /// The user-facing text for this error. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        NO_CONNECTION_MESSAGE
    }
}

/// Transport-layer errors: no connectivity, DNS, timeout, non-success status.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Timeout")]
    Timeout,

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Payload present but not matching the expected schema.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid number in `{field}`: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
