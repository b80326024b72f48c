//! Error types for the Pageforge generation pipeline.

use thiserror::Error;

/// Errors crossing the generation API boundary.
///
/// Failures below the orchestrator (both backend attempts) are absorbed
/// there; callers of `generate` only ever observe `GenerationFailed`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Primary backend unavailable: {0}")]
    PrimaryUnavailable(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Malformed provider output: {0}")]
    MalformedOutput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
