//! Generation orchestration: primary attempt, fallback attempt, provenance.
//!
//! The two backend attempts form an explicit pipeline with a defined
//! result per step rather than nested error handling, so the "which path
//! produced this document" decision is testable in isolation from network
//! mechanics. The fallback is only attempted after the primary
//! definitively fails, never speculatively in parallel.

use crate::config::ForgeConfig;
use crate::document::{GeneratedPage, LandingPageConfig, Provenance};
use crate::error::ApiError;
use crate::primary::{PrimaryBackend, PrimaryEndpoint};
use crate::prompt;
use crate::provider::{GeminiClient, GenerativeClient};
use tracing::{error, info, warn};

/// Engine identifier stamped on documents served by the fallback path.
/// Contains the `fallback` marker substring consumers recognize.
pub const FALLBACK_ENGINE: &str = "gemini-flash-fallback";

/// Outcome of a single backend attempt.
enum Attempt {
    /// A well-formed document was produced.
    Document(LandingPageConfig),
    /// The backend is unavailable; the next backend should be tried.
    Retry(String),
    /// The attempt failed in a way that ends the pipeline.
    Fatal(ApiError),
}

/// Drives one generation request through the primary backend and, on any
/// primary failure, the fallback provider.
pub struct GenerationOrchestrator {
    primary: Box<dyn PrimaryBackend>,
    fallback: Box<dyn GenerativeClient>,
}

impl GenerationOrchestrator {
    pub fn new(primary: Box<dyn PrimaryBackend>, fallback: Box<dyn GenerativeClient>) -> Self {
        Self { primary, fallback }
    }

    /// Build an orchestrator from configuration: the primary endpoint
    /// from `primary.base_url`, the fallback from the provider settings.
    pub fn from_config(config: &ForgeConfig) -> Result<Self, ApiError> {
        let primary = PrimaryEndpoint::new(config.primary.base_url.clone())?;
        let fallback = GeminiClient::new(
            config.fallback.model.clone(),
            config.fallback.resolved_api_key(),
            config.fallback.endpoint.clone(),
        )?;
        Ok(Self::new(Box::new(primary), Box::new(fallback)))
    }

    /// Obtain a document for `prompt`.
    ///
    /// Returns the primary document untouched (provenance `Primary`), or
    /// the fallback document stamped with [`FALLBACK_ENGINE`] (provenance
    /// `Fallback`). Errors only when both backends fail, as a single
    /// unified failure with no structured cause.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedPage, ApiError> {
        info!(prompt = %prompt, "dispatching prompt to primary engine");

        match self.try_primary(prompt).await {
            Attempt::Document(config) => {
                info!(engine = %config.meta.engine, "primary engine produced document");
                return Ok(GeneratedPage {
                    config,
                    provenance: Provenance::Primary,
                });
            }
            Attempt::Retry(reason) => {
                warn!(reason = %reason, "primary backend unavailable, engaging fallback provider");
            }
            Attempt::Fatal(err) => {
                // The primary attempt never classifies as fatal; kept so
                // the pipeline stays total over the step-result type.
                error!(error = %err, "primary attempt failed");
                return Err(ApiError::GenerationFailed(
                    "both generation backends failed".to_string(),
                ));
            }
        }

        match self.try_fallback(prompt).await {
            Attempt::Document(mut config) => {
                config.meta.engine = FALLBACK_ENGINE.to_string();
                info!(engine = %config.meta.engine, "fallback provider produced document");
                Ok(GeneratedPage {
                    config,
                    provenance: Provenance::Fallback,
                })
            }
            Attempt::Retry(reason) => {
                error!(reason = %reason, "fallback provider failed");
                Err(ApiError::GenerationFailed(
                    "both generation backends failed".to_string(),
                ))
            }
            Attempt::Fatal(err) => {
                error!(error = %err, "fallback provider failed");
                Err(ApiError::GenerationFailed(
                    "both generation backends failed".to_string(),
                ))
            }
        }
    }

    async fn try_primary(&self, prompt: &str) -> Attempt {
        match self.primary.generate_landing_page(prompt).await {
            Ok(config) => Attempt::Document(config),
            // Transport failure, non-2xx and malformed body all arrive
            // as one bucket; none of them end the pipeline.
            Err(err) => Attempt::Retry(err.to_string()),
        }
    }

    async fn try_fallback(&self, prompt: &str) -> Attempt {
        let schema = prompt::response_schema();
        let raw = match self
            .fallback
            .generate(prompt::SYSTEM_INSTRUCTION, prompt, &schema)
            .await
        {
            Ok(raw) => raw,
            Err(err) => return Attempt::Fatal(err),
        };

        // Unparseable fallback output is fatal, not retried.
        match serde_json::from_str::<LandingPageConfig>(&raw) {
            Ok(config) => Attempt::Document(config),
            Err(err) => Attempt::Fatal(ApiError::MalformedOutput(format!(
                "fallback output is not a valid document: {}",
                err
            ))),
        }
    }
}
