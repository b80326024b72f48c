//! Section rendering for the terminal preview.
//!
//! Boundary layer: consumes one `Section` plus the active theme and
//! dispatches on the section kind to one of six fixed layouts. Unknown
//! kinds render nothing. All text is pulled through the normalizer, so a
//! malformed payload degrades to placeholders instead of erroring. Theme
//! colors are applied as-is; a color string that fails to parse renders
//! untinted.

use crate::document::{LandingPageConfig, Section, SectionKind, ThemeConfig};
use crate::normalize::{case_items, extract, resolve_field, CaseItem};
use comfy_table::{presets, Table};
use owo_colors::OwoColorize;

const HERO_HEADLINE_KEYS: [&str; 3] = ["headline", "title", "heading"];
const HERO_SUBTEXT_KEYS: [&str; 4] = ["subtext", "description", "body", "subheading"];
const BUTTON_KEYS: [&str; 3] = ["button", "cta", "label"];
const CTA_HEADLINE_KEYS: [&str; 3] = ["headline", "text", "title"];

fn parse_hex_color(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Apply a theme color as a truecolor escape. Unparseable color strings
/// leave the text plain; color validity is never an error.
fn tint(text: &str, color: &str) -> String {
    match parse_hex_color(color) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

fn heading(text: &str, theme: &ThemeConfig) -> String {
    tint(&text.bold().to_string(), &theme.colors.primary)
}

fn button(label: &str, theme: &ThemeConfig) -> String {
    tint(&format!("[ {} ]", label), &theme.colors.primary)
}

/// Render a whole document: sections in array order, unknown kinds
/// skipped silently.
pub fn render_page(config: &LandingPageConfig) -> String {
    config
        .sections
        .iter()
        .filter_map(|section| render_section(section, &config.theme))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one section. `None` for an unrecognized section type: a no-op,
/// not an error.
pub fn render_section(section: &Section, theme: &ThemeConfig) -> Option<String> {
    let kind = section.kind()?;
    Some(match kind {
        SectionKind::Hero => render_hero(section, theme),
        SectionKind::Credibility => render_credibility(section, theme),
        SectionKind::Services => render_services(section, theme),
        SectionKind::Workflow => render_workflow(section, theme),
        SectionKind::CaseStudies => render_case_studies(section, theme),
        SectionKind::Cta => render_cta(section, theme),
    })
}

fn render_hero(section: &Section, theme: &ThemeConfig) -> String {
    let content = section.content.as_ref();
    let headline = resolve_field(content, &HERO_HEADLINE_KEYS, "Next-Gen Digital Systems");
    let subtext = resolve_field(
        content,
        &HERO_SUBTEXT_KEYS,
        "Transforming complexity into clarity.",
    );
    let cta = resolve_field(content, &BUTTON_KEYS, "Get Started");

    let mut out = String::new();
    out.push_str(&heading(&headline, theme));
    out.push('\n');
    out.push_str(&subtext);
    out.push('\n');
    out.push_str(&button(&cta, theme));

    let image = section
        .image
        .clone()
        .or_else(|| section.images.as_ref().and_then(|urls| urls.first().cloned()));
    if let Some(url) = image {
        out.push('\n');
        out.push_str(&format!("{} {}", "visual:".dimmed(), url));
    }
    out
}

fn render_credibility(section: &Section, theme: &ThemeConfig) -> String {
    let mut out = heading("Proof Points", theme);
    let stats: Vec<String> = section
        .stats
        .iter()
        .flatten()
        .map(extract)
        .collect();
    if stats.is_empty() {
        return out;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.add_row(stats);
    out.push('\n');
    out.push_str(&table.to_string());
    out
}

fn render_services(section: &Section, theme: &ThemeConfig) -> String {
    let mut out = heading("Core Capabilities", theme);
    for item in section.items.iter().flatten() {
        out.push('\n');
        out.push_str(&format!("  • {}", extract(item)));
    }
    out
}

fn render_workflow(section: &Section, theme: &ThemeConfig) -> String {
    let mut out = heading("Execution Framework", theme);
    for (index, step) in section.steps.iter().flatten().enumerate() {
        out.push('\n');
        out.push_str(&format!("  {:02}  {}", index + 1, extract(step)));
    }
    out
}

fn render_case_studies(section: &Section, theme: &ThemeConfig) -> String {
    let mut out = heading("Engineered Impact", theme);
    let entries = case_items(section);
    if entries.is_empty() {
        out.push('\n');
        out.push_str(&"  Case study data is currently being synthesized...".italic().to_string());
        return out;
    }
    for entry in entries {
        out.push('\n');
        match entry {
            CaseItem::Image(url) => out.push_str(&format!("  ▣ {}", url)),
            CaseItem::Blurb(text) => out.push_str(&format!("  ❝ {} ❞", text)),
        }
    }
    out
}

fn render_cta(section: &Section, theme: &ThemeConfig) -> String {
    let content = section.content.as_ref();
    let headline = resolve_field(
        content,
        &CTA_HEADLINE_KEYS,
        "Ready to build your competitive advantage.",
    );
    let cta = resolve_field(content, &BUTTON_KEYS, "Start the Conversation");

    format!("{}\n{}", heading(&headline, theme), button(&cta, theme))
}
