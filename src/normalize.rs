//! Resilient content normalization.
//!
//! Generation backends do not guarantee consistent field names or value
//! shapes release to release (observed divergence: an `images` array vs an
//! `examples` mapping for the same logical case-studies slot). Every rule
//! here is total: any JSON value reduces to a displayable string, so the
//! rendering layer can assume plain strings everywhere and render-time
//! content issues never propagate as errors.

use crate::document::Section;
use serde_json::{Map, Value};

/// Semantically meaningful key names, scanned in priority order when
/// reducing an object to text.
pub const PRIORITY_KEYS: [&str; 7] = [
    "text", "value", "label", "title", "headline", "name", "content",
];

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Reduce an arbitrary JSON value to a displayable string.
///
/// Rules, first match wins:
/// 1. Null → "".
/// 2. String or number → its string form.
/// 3. Object → first priority key holding a string or number.
/// 4. Object without one → first string-or-number property in enumeration
///    order, else "".
/// 5. Bool → its string form; array → its first string-or-number element,
///    else "".
pub fn extract(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Object(map) => {
            for key in PRIORITY_KEYS {
                if let Some(found) = map.get(key).and_then(scalar) {
                    return found;
                }
            }
            map.values().find_map(scalar).unwrap_or_default()
        }
        Value::Array(items) => items.iter().find_map(scalar).unwrap_or_default(),
    }
}

/// Resolve a semantic text field from a section `content` mapping.
///
/// The first key from `keys` that is present and non-empty (not null, not
/// the empty string) wins, normalized. Otherwise the normalized first
/// value in the mapping's enumeration order. An absent or empty mapping
/// yields `default`.
pub fn resolve_field(content: Option<&Map<String, Value>>, keys: &[&str], default: &str) -> String {
    let map = match content {
        Some(map) if !map.is_empty() => map,
        _ => return default.to_string(),
    };

    for key in keys {
        match map.get(*key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(text)) if text.is_empty() => continue,
            Some(value) => return extract(value),
        }
    }

    map.values().next().map(extract).unwrap_or_default()
}

/// A resolved case-study entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseItem {
    Image(String),
    Blurb(String),
}

/// Resolve the case-studies slot of a section.
///
/// The `images` array wins whenever present (even empty); otherwise the
/// `examples` mapping contributes its values in enumeration order. Each
/// entry is classified by content: anything starting with `http` renders
/// as an image reference, everything else as a text blurb.
pub fn case_items(section: &Section) -> Vec<CaseItem> {
    let raw: Vec<String> = if let Some(images) = &section.images {
        images.clone()
    } else if let Some(examples) = &section.examples {
        examples.values().map(extract).collect()
    } else {
        Vec::new()
    };

    raw.into_iter()
        .map(|entry| {
            if entry.starts_with("http") {
                CaseItem::Image(entry)
            } else {
                CaseItem::Blurb(entry)
            }
        })
        .collect()
}
