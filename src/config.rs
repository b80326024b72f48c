//! Configuration System
//!
//! File- and environment-driven configuration for the generation backends
//! and logging. Hierarchical merge: built-in defaults, then the global
//! config file, then `PAGEFORGE_*` environment overrides. Both backend
//! endpoints are opaque external configuration; nothing here validates
//! what they serve.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_PRIMARY_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_FALLBACK_MODEL: &str = "gemini-2.0-flash";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Primary generation endpoint
    #[serde(default)]
    pub primary: PrimaryConfig,

    /// Fallback generative provider
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Primary endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryConfig {
    /// Base URL of the primary generation service
    #[serde(default = "default_primary_base_url")]
    pub base_url: String,
}

fn default_primary_base_url() -> String {
    DEFAULT_PRIMARY_BASE_URL.to_string()
}

impl Default for PrimaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_primary_base_url(),
        }
    }
}

/// Fallback provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Model served by the fallback provider
    #[serde(default = "default_fallback_model")]
    pub model: String,

    /// API credential; resolution falls back to the GEMINI_API_KEY
    /// environment variable when unset
    #[serde(default)]
    pub api_key: Option<String>,

    /// Provider endpoint override (e.g. a local proxy)
    #[serde(default)]
    pub endpoint: Option<String>,
}

fn default_fallback_model() -> String {
    DEFAULT_FALLBACK_MODEL.to_string()
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            model: default_fallback_model(),
            api_key: None,
            endpoint: None,
        }
    }
}

impl FallbackConfig {
    /// Resolve the provider credential: explicit config wins, then the
    /// conventional environment variable. A missing credential resolves
    /// to the empty string — the fallback then fails at request time,
    /// which must not prevent a healthy primary from serving.
    pub fn resolved_api_key(&self) -> String {
        if let Some(key) = &self.api_key {
            if !key.is_empty() {
                return key.clone();
            }
        }
        std::env::var("GEMINI_API_KEY").unwrap_or_default()
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Primary(String),
    Fallback(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Primary(msg) => write!(f, "Primary: {}", msg),
            ValidationError::Fallback(msg) => write!(f, "Fallback: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ForgeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.primary.base_url.is_empty() {
            errors.push(ValidationError::Primary(
                "base_url cannot be empty".to_string(),
            ));
        } else if !self.primary.base_url.starts_with("http") {
            errors.push(ValidationError::Primary(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.primary.base_url
            )));
        }

        if self.fallback.model.is_empty() {
            errors.push(ValidationError::Fallback(
                "model cannot be empty".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Path to the global config file:
/// `$XDG_CONFIG_HOME/pageforge/config.toml` or
/// `~/.config/pageforge/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("pageforge").join("config.toml"));
        }
    }
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("pageforge")
            .join("config.toml")
    })
}

/// Configuration loader facade
pub struct ConfigLoader;

impl ConfigLoader {
    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ApiError> {
        Ok(Config::builder()
            .set_default("primary.base_url", DEFAULT_PRIMARY_BASE_URL)?
            .set_default("fallback.model", DEFAULT_FALLBACK_MODEL)?)
    }

    /// Load configuration: defaults, then the global file when present,
    /// then `PAGEFORGE_*` environment overrides
    /// (e.g. `PAGEFORGE_PRIMARY__BASE_URL`).
    pub fn load() -> Result<ForgeConfig, ApiError> {
        let mut builder = Self::builder_with_defaults()?;

        if let Some(path) = global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            } else {
                warn!(
                    config_path = %path.display(),
                    "Global configuration file not found; using defaults"
                );
            }
        }

        builder = builder.add_source(Environment::with_prefix("PAGEFORGE").separator("__"));

        let merged = builder.build()?;
        let forge: ForgeConfig = merged.try_deserialize()?;
        Ok(forge)
    }

    /// Load configuration from an explicit file, bypassing the global
    /// file and environment overrides.
    pub fn load_from_file(path: &Path) -> Result<ForgeConfig, ApiError> {
        let merged = Self::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()))
            .build()?;
        let forge: ForgeConfig = merged.try_deserialize()?;
        Ok(forge)
    }
}
