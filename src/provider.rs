//! Generative provider client for the fallback path.
//!
//! A single trait seam covers the one call the orchestrator needs: a
//! schema-constrained content generation returning raw text. The concrete
//! client speaks the Gemini `generateContent` REST API; tests substitute a
//! scripted mock so fallback behavior is exercised without a network.

use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// One schema-constrained content-generation call.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Generate raw text from a system instruction and a user prompt,
    /// constrained by `schema`. The text is expected (not guaranteed) to
    /// be valid JSON; parsing is the caller's concern.
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, ApiError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Get the model name
    fn model_name(&self) -> &str;
}

const PROVIDER_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const PROVIDER_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

fn build_provider_http_client() -> Result<Client, ApiError> {
    Client::builder()
        .no_proxy()
        .connect_timeout(PROVIDER_HTTP_CONNECT_TIMEOUT)
        .timeout(PROVIDER_HTTP_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ApiError::ProviderError(format!("Failed to create HTTP client: {}", e)))
}

// Helper function to map HTTP errors to ApiError
fn map_http_error(error: reqwest::Error) -> ApiError {
    if error.is_status() {
        let status = error.status().unwrap();
        match status.as_u16() {
            401 | 403 => ApiError::ProviderAuthFailed(format!("Authentication failed: {}", error)),
            429 => ApiError::ProviderRateLimit(format!("Rate limit exceeded: {}", error)),
            _ => ApiError::ProviderRequestFailed(format!(
                "Request failed with status {}: {}",
                status, error
            )),
        }
    } else if error.is_timeout() {
        ApiError::ProviderRequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::ProviderRequestFailed(format!("Connection error: {}", error))
    } else {
        ApiError::ProviderError(format!("HTTP error: {}", error))
    }
}

/// Gemini provider client (REST `generateContent`)
pub struct GeminiClient {
    client: Client,
    model: String,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(model: String, api_key: String, base_url: Option<String>) -> Result<Self, ApiError> {
        let client = build_provider_http_client()?;
        let base_url = base_url
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string());

        Ok(Self {
            client,
            model,
            api_key,
            base_url,
        })
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, ApiError> {
        let request = json!({
            "system_instruction": {
                "parts": [{ "text": system_instruction }]
            },
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] }
            ],
            "generationConfig": {
                "temperature": 0.3,
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status.as_u16() {
                401 | 403 => {
                    ApiError::ProviderAuthFailed(format!("Authentication failed: {}", error_text))
                }
                429 => ApiError::ProviderRateLimit(format!("Rate limit exceeded: {}", error_text)),
                _ => ApiError::ProviderRequestFailed(format!(
                    "Request failed with status {}: {}",
                    status, error_text
                )),
            });
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ApiError::ProviderError(format!("Failed to parse response: {}", e)))?;

        let candidate = completion
            .candidates
            .first()
            .ok_or_else(|| ApiError::ProviderError("No candidates in response".to_string()))?;

        let text = candidate
            .content
            .parts
            .first()
            .map(|part| part.text.clone())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ApiError::ProviderError(
                "Empty candidate content in response".to_string(),
            ));
        }

        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// Mock provider for testing
#[cfg(test)]
pub struct MockGenerative {
    responses: parking_lot::Mutex<Vec<Result<String, ApiError>>>,
    calls: std::sync::Arc<parking_lot::Mutex<Vec<String>>>,
    model_name: String,
}

#[cfg(test)]
impl MockGenerative {
    pub fn new(responses: Vec<Result<String, ApiError>>) -> Self {
        Self {
            responses: parking_lot::Mutex::new(responses),
            calls: std::sync::Arc::new(parking_lot::Mutex::new(Vec::new())),
            model_name: "mock-model".to_string(),
        }
    }

    /// Shared handle to the recorded prompts; survives boxing the mock.
    pub fn call_log(&self) -> std::sync::Arc<parking_lot::Mutex<Vec<String>>> {
        self.calls.clone()
    }

    pub fn succeeding_with(body: &str) -> Self {
        Self::new(vec![Ok(body.to_string())])
    }

    pub fn failing_with(error: ApiError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[cfg(test)]
#[async_trait]
impl GenerativeClient for MockGenerative {
    async fn generate(
        &self,
        _system_instruction: &str,
        prompt: &str,
        _schema: &Value,
    ) -> Result<String, ApiError> {
        self.calls.lock().push(prompt.to_string());
        let mut responses = self.responses.lock();
        if responses.is_empty() {
            Ok("{}".to_string())
        } else {
            responses.remove(0)
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
