//! Primary generation endpoint client.
//!
//! Talks to the first-choice backend service. Every failure mode —
//! transport error, non-2xx status, unparseable body — collapses into one
//! `PrimaryUnavailable` bucket; the orchestrator treats them identically
//! when deciding to engage the fallback provider.

use crate::document::LandingPageConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

/// Header that tells tunnel providers to return the API response directly
/// instead of injecting their HTML interstitial page.
const TUNNEL_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";

const PRIMARY_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const PRIMARY_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// The primary document-generation backend.
#[async_trait]
pub trait PrimaryBackend: Send + Sync {
    /// Request a document for `prompt`. Succeeds only on an HTTP-level
    /// success status with a body deserializing as `LandingPageConfig`;
    /// anything else is `PrimaryUnavailable`.
    async fn generate_landing_page(&self, prompt: &str) -> Result<LandingPageConfig, ApiError>;
}

/// HTTP client for the primary endpoint.
pub struct PrimaryEndpoint {
    client: Client,
    base_url: String,
}

impl PrimaryEndpoint {
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .no_proxy()
            .connect_timeout(PRIMARY_HTTP_CONNECT_TIMEOUT)
            .timeout(PRIMARY_HTTP_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::ProviderError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl PrimaryBackend for PrimaryEndpoint {
    async fn generate_landing_page(&self, prompt: &str) -> Result<LandingPageConfig, ApiError> {
        let url = format!("{}/generate-landing-page", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header(TUNNEL_BYPASS_HEADER, "true")
            .json(&json!({ "prompt": prompt }))
            .send()
            .await
            .map_err(|e| ApiError::PrimaryUnavailable(format!("transport error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::PrimaryUnavailable(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        response
            .json::<LandingPageConfig>()
            .await
            .map_err(|e| ApiError::PrimaryUnavailable(format!("malformed body: {}", e)))
    }
}

// Mock primary backend for testing
#[cfg(test)]
pub struct MockPrimary {
    outcomes: parking_lot::Mutex<Vec<Result<LandingPageConfig, ApiError>>>,
    calls: std::sync::Arc<parking_lot::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl MockPrimary {
    pub fn new(outcomes: Vec<Result<LandingPageConfig, ApiError>>) -> Self {
        Self {
            outcomes: parking_lot::Mutex::new(outcomes),
            calls: std::sync::Arc::new(parking_lot::Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded prompts; survives boxing the mock.
    pub fn call_log(&self) -> std::sync::Arc<parking_lot::Mutex<Vec<String>>> {
        self.calls.clone()
    }

    pub fn serving(config: LandingPageConfig) -> Self {
        Self::new(vec![Ok(config)])
    }

    pub fn unavailable(reason: &str) -> Self {
        Self::new(vec![Err(ApiError::PrimaryUnavailable(reason.to_string()))])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[cfg(test)]
#[async_trait]
impl PrimaryBackend for MockPrimary {
    async fn generate_landing_page(&self, prompt: &str) -> Result<LandingPageConfig, ApiError> {
        self.calls.lock().push(prompt.to_string());
        let mut outcomes = self.outcomes.lock();
        if outcomes.is_empty() {
            Err(ApiError::PrimaryUnavailable("no scripted outcome".to_string()))
        } else {
            outcomes.remove(0)
        }
    }
}
