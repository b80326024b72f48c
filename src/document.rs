//! Landing page document model.
//!
//! A `LandingPageConfig` is produced once per generation call and replaces
//! the previous document atomically; rendering treats it as read-only.
//! Section payloads are deliberately loose (`serde_json::Value`) because
//! the generation backends are not contractually guaranteed to emit
//! consistent field names or shapes — see `normalize` for the rules that
//! reduce them to displayable text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dark/light rendering mode.
///
/// Deserializes case-insensitively and degrades to `Dark` on anything
/// unrecognized: the fallback schema leaves `theme.mode` a free string,
/// and a bad value must not reject an otherwise valid document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }
}

impl Serialize for Mode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.eq_ignore_ascii_case("light") {
            Ok(Mode::Light)
        } else {
            Ok(Mode::Dark)
        }
    }
}

/// Theme color strings. CSS color values (hex or named), passed through
/// without format validation; an invalid value degrades visually at
/// render time rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: Mode,
    pub colors: ThemeColors,
}

/// Inferred classification of the user prompt. Advisory only: nothing
/// enforces the boolean hints against actual section presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub wants_trust: bool,
    #[serde(default)]
    pub wants_case_studies: bool,
}

/// Document provenance metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Opaque content fingerprint set by whichever backend produced the
    /// document. Used only as a rendering/reconciliation key; never
    /// recomputed or validated here.
    pub hash: String,
    /// Identifier of the producing backend. The fallback path stamps a
    /// value containing the `fallback` substring.
    pub engine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// The closed set of renderable section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Credibility,
    Services,
    Workflow,
    CaseStudies,
    Cta,
}

impl SectionKind {
    /// Resolve a raw section type string. Unrecognized types return
    /// `None` and render as a no-op, not an error.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "hero" => Some(SectionKind::Hero),
            "credibility" => Some(SectionKind::Credibility),
            "services" => Some(SectionKind::Services),
            "workflow" => Some(SectionKind::Workflow),
            "case_studies" => Some(SectionKind::CaseStudies),
            "cta" => Some(SectionKind::Cta),
            _ => None,
        }
    }
}

/// One page section: a type tag plus a union of optional, type-dependent
/// payload shapes. Elements of `stats`/`items`/`steps` may be strings or
/// nested objects; `examples` is the alternate key→description encoding
/// of the case-studies slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub section_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Map<String, Value>>,
}

impl Section {
    pub fn kind(&self) -> Option<SectionKind> {
        SectionKind::from_raw(&self.section_type)
    }
}

/// The document produced by generation and consumed by rendering.
/// Section order is render order; duplicates are permitted and no kind is
/// required to appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingPageConfig {
    pub meta: Meta,
    pub intent: Intent,
    pub theme: ThemeConfig,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Which backend produced a document.
///
/// Carried alongside the document, decoupled from the `meta.engine`
/// display string; consumers branch on this rather than substring-testing
/// the engine identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Primary,
    Fallback,
}

impl Provenance {
    /// Display label derived from provenance for status surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Provenance::Primary => "native",
            Provenance::Fallback => "hybrid",
        }
    }
}

/// A generated document plus its provenance tag.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub config: LandingPageConfig,
    pub provenance: Provenance,
}

/// A built-in theme preset selectable from the CLI.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemePreset {
    pub name: &'static str,
    pub primary: &'static str,
    pub background: &'static str,
}

pub const THEME_PRESETS: [ThemePreset; 4] = [
    ThemePreset {
        name: "Enterprise Gold",
        primary: "#F5B301",
        background: "#0B1220",
    },
    ThemePreset {
        name: "Modern Azure",
        primary: "#2563EB",
        background: "#0f172a",
    },
    ThemePreset {
        name: "Clean Light",
        primary: "#2563EB",
        background: "#FFFFFF",
    },
    ThemePreset {
        name: "Deep Emerald",
        primary: "#10B981",
        background: "#064e3b",
    },
];

fn text_map(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}

fn text_values(values: &[&str]) -> Vec<Value> {
    values
        .iter()
        .map(|value| Value::String(value.to_string()))
        .collect()
}

impl LandingPageConfig {
    /// The document shown before the first generation completes.
    pub fn default_document() -> Self {
        Self {
            meta: Meta {
                hash: "initial".to_string(),
                engine: "pageforge-default".to_string(),
                brand: None,
            },
            intent: Intent {
                industry: "Consulting".to_string(),
                tone: "Professional".to_string(),
                mode: Mode::Dark,
                wants_trust: true,
                wants_case_studies: true,
            },
            theme: ThemeConfig {
                mode: Mode::Dark,
                colors: ThemeColors {
                    primary: "#F5B301".to_string(),
                    background: "#0B1220".to_string(),
                    text: "#E5E7EB".to_string(),
                },
            },
            sections: vec![
                Section {
                    section_type: "hero".to_string(),
                    content: Some(text_map(&[
                        ("headline", "Strategic Intelligence for Modern Enterprise"),
                        ("subtext", "Navigate complexity with data-driven decision making."),
                    ])),
                    image: Some("https://picsum.photos/1400/900?random=1".to_string()),
                    images: None,
                    stats: None,
                    items: None,
                    steps: None,
                    examples: None,
                },
                Section {
                    section_type: "credibility".to_string(),
                    content: None,
                    image: None,
                    images: None,
                    stats: Some(text_values(&["15+ Years", "$500M+ Value Created"])),
                    items: None,
                    steps: None,
                    examples: None,
                },
                Section {
                    section_type: "services".to_string(),
                    content: None,
                    image: None,
                    images: None,
                    stats: None,
                    items: Some(text_values(&[
                        "Market Strategy",
                        "Digital Transformation",
                        "Operational Excellence",
                    ])),
                    steps: None,
                    examples: None,
                },
                Section {
                    section_type: "cta".to_string(),
                    content: Some(text_map(&[
                        ("text", "Schedule a Strategy Session"),
                        ("button", "Contact Us"),
                    ])),
                    image: None,
                    images: None,
                    stats: None,
                    items: None,
                    steps: None,
                    examples: None,
                },
            ],
        }
    }
}
