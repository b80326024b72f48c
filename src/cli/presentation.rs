//! CLI presentation: document and preset formatting for text and json
//! output. The provenance status line derives its label from the
//! `Provenance` enum, never from substring-testing the engine string.

use crate::document::{GeneratedPage, LandingPageConfig, THEME_PRESETS};
use crate::error::ApiError;
use crate::render;
use owo_colors::OwoColorize;

/// Status line plus the rendered preview.
pub fn format_generate_result_text(page: &GeneratedPage) -> String {
    let mut status = format!(
        "engine: {} ({})",
        page.config.meta.engine,
        page.provenance.label()
    );
    if let Some(brand) = &page.config.meta.brand {
        status.push_str(&format!(" · brand: {}", brand));
    }

    format!(
        "{}\n\n{}",
        status.dimmed(),
        render::render_page(&page.config)
    )
}

/// Pretty-printed raw document.
pub fn format_document_json(config: &LandingPageConfig) -> Result<String, ApiError> {
    serde_json::to_string_pretty(config)
        .map_err(|e| ApiError::MalformedOutput(format!("Failed to serialize document: {}", e)))
}

/// Theme preset listing in the requested format.
pub fn format_theme_list(format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return serde_json::to_string_pretty(&THEME_PRESETS)
            .map_err(|e| ApiError::MalformedOutput(format!("Failed to serialize presets: {}", e)));
    }

    let mut lines = Vec::with_capacity(THEME_PRESETS.len());
    for preset in THEME_PRESETS {
        lines.push(format!(
            "{:<16} primary {}  background {}",
            preset.name, preset.primary, preset.background
        ));
    }
    Ok(lines.join("\n"))
}
