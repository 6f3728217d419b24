//! Client for a delegated footprint calculation service.
//!
//! Some deployments compute the total on a separate service instead of
//! locally. The service accepts the flat [`InputProfile`] JSON on
//! `POST {base_url}/predict` and answers with `{"footprint": <number>}`.
//! This crate's own server speaks the same contract (see [`crate::api`]).
//!
//! # Failure semantics
//!
//! Every failure is reported as a [`RemoteCalculationError`] and no footprint
//! is produced. Callers are expected to issue one request per user action and
//! to keep their previous result when a request fails.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::calculator::clamp_profile;
use crate::error::RemoteCalculationError;
use crate::model::InputProfile;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the `/predict` calculation endpoint.
#[derive(Clone)]
pub struct RemoteCalculator {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteCalculator {
    /// Create a client for the service at `base_url` with [`DEFAULT_TIMEOUT`].
    pub fn with_base_url(base_url: &str) -> Result<Self, RemoteCalculationError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, RemoteCalculationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RemoteCalculationError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the service for the monthly footprint of `profile`, in kg CO₂e.
    ///
    /// The profile is clamped to its documented ranges before it is sent.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let remote = RemoteCalculator::with_base_url("http://localhost:3000")?;
    /// let total = remote.predict(&InputProfile::default()).await?;
    /// ```
    #[instrument(skip(self, profile), fields(base_url = %self.base_url))]
    pub async fn predict(&self, profile: &InputProfile) -> Result<f64, RemoteCalculationError> {
        let url = format!("{}/predict", self.base_url);
        let profile = clamp_profile(profile);

        let response = self
            .client
            .post(&url)
            .json(&profile)
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "Calculation request failed"))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Calculation service rejected request");
            return Err(RemoteCalculationError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let footprint = parse_footprint(&body)
            .inspect_err(|e| warn!(error = %e, "Unusable calculation response"))?;

        debug!(footprint, "Remote footprint received");
        Ok(footprint)
    }
}

/// Extract the `footprint` field from a `/predict` response body.
fn parse_footprint(body: &[u8]) -> Result<f64, RemoteCalculationError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| RemoteCalculationError::MalformedPayload(e.to_string()))?;

    let footprint = payload
        .get("footprint")
        .and_then(Value::as_f64)
        .ok_or(RemoteCalculationError::MissingFootprint)?;

    if footprint < 0.0 {
        return Err(RemoteCalculationError::MalformedPayload(format!(
            "negative footprint {footprint}"
        )));
    }

    Ok(footprint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_footprint() {
        assert_eq!(parse_footprint(br#"{"footprint": 468.25}"#).unwrap(), 468.25);
        assert_eq!(parse_footprint(br#"{"footprint": 12}"#).unwrap(), 12.0);
    }

    #[test]
    fn test_parse_footprint_missing_field() {
        assert!(matches!(
            parse_footprint(br#"{"total": 10.0}"#),
            Err(RemoteCalculationError::MissingFootprint)
        ));
        assert!(matches!(
            parse_footprint(br#"{"footprint": "ten"}"#),
            Err(RemoteCalculationError::MissingFootprint)
        ));
    }

    #[test]
    fn test_parse_footprint_malformed() {
        assert!(matches!(
            parse_footprint(b"<html>oops</html>"),
            Err(RemoteCalculationError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_footprint(br#"{"footprint": -3.0}"#),
            Err(RemoteCalculationError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let remote = RemoteCalculator::with_base_url("http://localhost:3000/").unwrap();
        assert_eq!(remote.base_url(), "http://localhost:3000");
    }
}
