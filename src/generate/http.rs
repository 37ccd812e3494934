//! HTTP Generator
//!
//! reqwest-backed implementation of [`PrayerGenerator`] that posts to a
//! configurable upstream generation endpoint.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::{GenerateError, GenerationResult, PrayerGenerator};

// == HTTP Generator ==
/// Calls an upstream generation service over HTTP.
///
/// Error mapping: connection/send failures and non-success statuses are
/// `Transport` (retryable); a 2xx body that does not decode into a
/// [`GenerationResult`] is `InvalidResponse` (terminal).
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGenerator {
    /// Creates a generator targeting the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PrayerGenerator for HttpGenerator {
    async fn generate(
        &self,
        tradition: &str,
        situation: &str,
    ) -> Result<GenerationResult, GenerateError> {
        debug!(%tradition, "Calling upstream generation endpoint");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({
                "tradition": tradition,
                "situation": situation,
            }))
            .send()
            .await
            .map_err(|e| GenerateError::Transport(format!("generation request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Transport(format!(
                "generation endpoint returned {}: {}",
                status, body
            )));
        }

        response
            .json::<GenerationResult>()
            .await
            .map_err(|e| GenerateError::InvalidResponse(format!("undecodable response body: {}", e)))
    }
}
