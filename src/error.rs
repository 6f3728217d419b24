//! Error types for the delegated calculation boundary.
//!
//! The local calculation has no error type: out-of-range input is clamped
//! and an empty recommendation set is an ordinary (empty) result.

use thiserror::Error;

/// Failure of the remote calculation service.
///
/// Always recoverable. No footprint is produced, so callers should keep any
/// previous result and show a failure indication instead of a zero total.
#[derive(Debug, Error)]
pub enum RemoteCalculationError {
    #[error("calculation service returned status {status}")]
    Status { status: u16 },

    #[error("calculation service response has no numeric `footprint` field")]
    MissingFootprint,

    #[error("calculation service returned a malformed payload: {0}")]
    MalformedPayload(String),

    #[error("calculation service timed out")]
    Timeout,

    #[error("calculation service request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for RemoteCalculationError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            RemoteCalculationError::Timeout
        } else {
            RemoteCalculationError::Transport(error)
        }
    }
}
