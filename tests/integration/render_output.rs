//! Rendering through the public API: section dispatch, ordering, and
//! graceful degradation on malformed content.

use pageforge::document::LandingPageConfig;
use pageforge::render::{render_page, render_section};

fn document(sections: serde_json::Value) -> LandingPageConfig {
    serde_json::from_value(serde_json::json!({
        "meta": { "hash": "h", "engine": "e" },
        "intent": { "industry": "X", "tone": "Y", "mode": "dark",
                    "wants_trust": true, "wants_case_studies": true },
        "theme": { "mode": "dark",
                   // Named colors: passed through, render untinted
                   "colors": { "primary": "gold", "background": "black", "text": "white" } },
        "sections": sections
    }))
    .unwrap()
}

#[test]
fn test_unknown_section_kind_is_a_silent_no_op() {
    let config = document(serde_json::json!([
        { "type": "unknown_kind", "content": { "text": "never shown" } }
    ]));

    assert!(render_section(&config.sections[0], &config.theme).is_none());
    assert_eq!(render_page(&config), "");
}

#[test]
fn test_render_order_follows_section_order() {
    let config = document(serde_json::json!([
        { "type": "cta", "content": { "text": "Last call" } },
        { "type": "hero", "content": { "headline": "First impression" } }
    ]));

    let out = render_page(&config);
    let cta = out.find("Last call").unwrap();
    let hero = out.find("First impression").unwrap();
    assert!(cta < hero, "sections must render in array order");
}

#[test]
fn test_malformed_content_degrades_to_text() {
    let config = document(serde_json::json!([
        { "type": "hero",
          "content": { "headline": { "value": 42, "label": "count" },
                       "subtext": { "deeply": { "nested": true } } } },
        { "type": "credibility", "stats": [ { "no": { "scalar": "here" } } ] },
        { "type": "services", "items": [ null, true, 3 ] }
    ]));

    let out = render_page(&config);
    // Object headline reduced by priority keys
    assert!(out.contains("42"));
    // Unreducible object becomes empty, not a Debug dump
    assert!(!out.contains("nested"));
    assert!(!out.contains('{'));
    // Scalar oddities coerce to their string forms
    assert!(out.contains("true"));
    assert!(out.contains('3'));
}

#[test]
fn test_duplicate_sections_each_render() {
    let config = document(serde_json::json!([
        { "type": "services", "items": ["Audit"] },
        { "type": "services", "items": ["Retainer"] }
    ]));

    let out = render_page(&config);
    assert!(out.contains("Audit"));
    assert!(out.contains("Retainer"));
}

#[test]
fn test_full_document_renders_every_known_kind() {
    let config = document(serde_json::json!([
        { "type": "hero", "content": { "headline": "H" } },
        { "type": "credibility", "stats": ["S"] },
        { "type": "services", "items": ["I"] },
        { "type": "workflow", "steps": ["W"] },
        { "type": "case_studies", "images": ["http://x/1.png"] },
        { "type": "cta", "content": { "text": "C" } }
    ]));

    let out = render_page(&config);
    for needle in ["H", "S", "I", "01  W", "http://x/1.png", "C"] {
        assert!(out.contains(needle), "missing {}", needle);
    }
}
