//! Document parsing tolerance against realistic backend payloads.
//!
//! The primary service and the fallback provider both emit the
//! LandingPageConfig shape, but with different levels of discipline:
//! extra top-level fields, loosely typed section payloads, free-form
//! section types. Parsing must accept all of it; only a missing core
//! shape counts as malformed.

use pageforge::document::{LandingPageConfig, Mode, SectionKind};

/// A payload in the primary backend's style: extra `layout` and theme
/// fields the document model does not track.
const PRIMARY_STYLE_BODY: &str = r##"{
    "meta": {
        "engine": "llama3b-ui-agent",
        "brand": "Atelier North",
        "hash": "9f8c2a"
    },
    "intent": {
        "industry": "Architecture",
        "tone": "Minimalist",
        "mode": "dark",
        "wants_trust": true,
        "wants_case_studies": true
    },
    "theme": {
        "mode": "dark",
        "colors": {
            "primary": "#D4AF37",
            "background": "#0B0B0B",
            "surface": "#111827",
            "text": "#F9FAFB"
        },
        "fonts": { "heading": "Inter", "body": "Inter" }
    },
    "layout": { "max_width": 1200, "grid": "12-column" },
    "sections": [
        {
            "type": "hero",
            "content": { "headline": "Form Follows Intention" },
            "image": "https://picsum.photos/1400/900?random=11"
        },
        { "type": "credibility", "stats": ["AI-first engineering", "Trusted expertise"] },
        { "type": "workflow", "steps": ["Discovery", "Design", "Build", "Deploy"] },
        { "type": "case_studies", "examples": { "tower": "32-story rebuild", "plaza": "Civic landmark" } },
        { "type": "testimonials", "content": { "text": "unrecognized kind, parsed anyway" } }
    ]
}"##;

#[test]
fn test_primary_style_payload_parses() {
    let config: LandingPageConfig = serde_json::from_str(PRIMARY_STYLE_BODY).unwrap();

    assert_eq!(config.meta.engine, "llama3b-ui-agent");
    assert_eq!(config.meta.brand.as_deref(), Some("Atelier North"));
    assert_eq!(config.theme.mode, Mode::Dark);
    assert_eq!(config.sections.len(), 5);

    // Unrecognized section type parses but resolves to no kind
    assert_eq!(config.sections[4].kind(), None);
    assert_eq!(config.sections[3].kind(), Some(SectionKind::CaseStudies));
}

#[test]
fn test_sections_accept_mixed_value_shapes() {
    let raw = r##"{
        "meta": { "hash": "h", "engine": "e" },
        "intent": { "industry": "", "tone": "", "mode": "light",
                    "wants_trust": false, "wants_case_studies": false },
        "theme": { "mode": "light",
                   "colors": { "primary": "#2563EB", "background": "#FFFFFF", "text": "#111827" } },
        "sections": [
            { "type": "credibility",
              "stats": [ "15+ Years", 42, { "value": "99.99%", "label": "uptime" } ] },
            { "type": "services",
              "items": [ { "name": "Strategy" }, { "title": "Delivery" } ] }
        ]
    }"##;

    let config: LandingPageConfig = serde_json::from_str(raw).unwrap();
    assert_eq!(config.sections[0].stats.as_ref().unwrap().len(), 3);
    assert_eq!(config.sections[1].items.as_ref().unwrap().len(), 2);
}

#[test]
fn test_missing_sections_default_to_empty() {
    let raw = r##"{
        "meta": { "hash": "h", "engine": "e" },
        "intent": { "industry": "X", "tone": "Y", "mode": "dark",
                    "wants_trust": true, "wants_case_studies": false },
        "theme": { "mode": "dark",
                   "colors": { "primary": "#fff", "background": "#000", "text": "#eee" } }
    }"##;

    let config: LandingPageConfig = serde_json::from_str(raw).unwrap();
    assert!(config.sections.is_empty());
}

#[test]
fn test_missing_core_shape_is_rejected() {
    // No meta: this is the "malformed body" bucket, not a tolerated shape
    let raw = r#"{ "sections": [] }"#;
    assert!(serde_json::from_str::<LandingPageConfig>(raw).is_err());
}

#[test]
fn test_duplicate_sections_are_permitted() {
    let raw = r##"{
        "meta": { "hash": "h", "engine": "e" },
        "intent": { "industry": "X", "tone": "Y", "mode": "dark",
                    "wants_trust": true, "wants_case_studies": false },
        "theme": { "mode": "dark",
                   "colors": { "primary": "#fff", "background": "#000", "text": "#eee" } },
        "sections": [
            { "type": "hero", "content": { "headline": "One" } },
            { "type": "hero", "content": { "headline": "Two" } }
        ]
    }"##;

    let config: LandingPageConfig = serde_json::from_str(raw).unwrap();
    assert_eq!(config.sections.len(), 2);
    assert!(config
        .sections
        .iter()
        .all(|s| s.kind() == Some(SectionKind::Hero)));
}

#[test]
fn test_serialization_omits_absent_payloads() {
    let config = LandingPageConfig::default_document();
    let raw = serde_json::to_string(&config).unwrap();

    // The credibility section carries only stats; absent payload slots
    // are not serialized as nulls
    assert!(!raw.contains("\"items\":null"));
    assert!(!raw.contains("\"examples\":null"));
}
