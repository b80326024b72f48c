//! CLI route: single route table and run context. Dispatches to domain
//! services and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation;
use crate::config::{ConfigLoader, ForgeConfig};
use crate::document::LandingPageConfig;
use crate::error::ApiError;
use crate::orchestrator::GenerationOrchestrator;
use std::path::PathBuf;
use tracing::info;

/// Per-invocation context: loaded, validated configuration.
pub struct RunContext {
    config: ForgeConfig,
}

impl RunContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load()?,
        };

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    /// Execute a parsed command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate { prompt, format } => self.run_generate(prompt.clone(), format),
            Commands::Preview { format } => self.run_preview(format),
            Commands::Themes { format } => presentation::format_theme_list(format),
        }
    }

    fn run_generate(&self, prompt: Option<String>, format: &str) -> Result<String, ApiError> {
        let prompt = match prompt {
            Some(prompt) if !prompt.trim().is_empty() => prompt,
            _ => read_prompt_interactively()?,
        };

        let orchestrator = GenerationOrchestrator::from_config(&self.config)?;

        // Sequential single-flight: one generation per invocation, so no
        // re-entry guard is needed here.
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| ApiError::GenerationFailed(format!("Failed to create runtime: {}", e)))?;
        let page = rt.block_on(orchestrator.generate(&prompt))?;

        info!(provenance = page.provenance.label(), "generation complete");

        match format {
            "json" => presentation::format_document_json(&page.config),
            _ => Ok(presentation::format_generate_result_text(&page)),
        }
    }

    fn run_preview(&self, format: &str) -> Result<String, ApiError> {
        let document = LandingPageConfig::default_document();
        match format {
            "json" => presentation::format_document_json(&document),
            _ => Ok(crate::render::render_page(&document)),
        }
    }
}

fn read_prompt_interactively() -> Result<String, ApiError> {
    dialoguer::Input::<String>::new()
        .with_prompt("Describe your project")
        .interact_text()
        .map_err(|e| ApiError::InputError(format!("Failed to read prompt: {}", e)))
}
