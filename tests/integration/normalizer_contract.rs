//! Normalizer contract: every field read from a section payload resolves
//! to a displayable string or "", regardless of the generator's shape.

use pageforge::document::Section;
use pageforge::normalize::{case_items, extract, resolve_field, CaseItem, PRIORITY_KEYS};
use serde_json::{json, Value};

#[test]
fn test_extract_handles_every_shape_class() {
    let cases: Vec<(Value, &str)> = vec![
        (Value::Null, ""),
        (json!("plain"), "plain"),
        (json!(7), "7"),
        (json!(true), "true"),
        (json!({ "value": 42, "label": "count" }), "42"),
        (json!({ "unrelated": "first wins" }), "first wins"),
        (json!({ "only": { "nested": "deep" } }), ""),
        (json!([]), ""),
        (json!({}), ""),
    ];

    for (input, expected) in cases {
        assert_eq!(extract(&input), expected, "input: {}", input);
    }
}

#[test]
fn test_priority_list_matches_declared_order() {
    assert_eq!(
        PRIORITY_KEYS,
        ["text", "value", "label", "title", "headline", "name", "content"]
    );

    // Each key beats every key after it, regardless of insertion order
    for (index, winner) in PRIORITY_KEYS.iter().enumerate() {
        for loser in &PRIORITY_KEYS[index + 1..] {
            let mut object = serde_json::Map::new();
            object.insert(loser.to_string(), json!("lost"));
            object.insert(winner.to_string(), json!("won"));
            assert_eq!(
                extract(&Value::Object(object)),
                "won",
                "{} should beat {}",
                winner,
                loser
            );
        }
    }
}

#[test]
fn test_field_resolution_spec_table() {
    let content = json!({ "headline": "A", "title": "B" });
    let map = content.as_object().unwrap();
    assert_eq!(resolve_field(Some(map), &["headline", "title"], ""), "A");

    let content = json!({ "foo": "bar" });
    let map = content.as_object().unwrap();
    assert_eq!(resolve_field(Some(map), &["headline", "title"], ""), "bar");
}

#[test]
fn test_case_items_alternate_encodings() {
    let with_images: Section = serde_json::from_value(json!({
        "type": "case_studies",
        "images": ["http://x/1.png"]
    }))
    .unwrap();
    assert_eq!(
        case_items(&with_images),
        vec![CaseItem::Image("http://x/1.png".to_string())]
    );

    let with_examples: Section = serde_json::from_value(json!({
        "type": "case_studies",
        "examples": { "p1": "Grew 40%", "p2": "Launched in 3 weeks" }
    }))
    .unwrap();
    assert_eq!(
        case_items(&with_examples),
        vec![
            CaseItem::Blurb("Grew 40%".to_string()),
            CaseItem::Blurb("Launched in 3 weeks".to_string()),
        ]
    );
}

#[test]
fn test_examples_with_object_values_still_normalize() {
    let section: Section = serde_json::from_value(json!({
        "type": "case_studies",
        "examples": {
            "p1": { "text": "Shipped in a quarter" },
            "p2": 12
        }
    }))
    .unwrap();

    assert_eq!(
        case_items(&section),
        vec![
            CaseItem::Blurb("Shipped in a quarter".to_string()),
            CaseItem::Blurb("12".to_string()),
        ]
    );
}
