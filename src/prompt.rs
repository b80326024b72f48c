//! Fallback generation contract: the fixed system instruction and the
//! structured-output schema handed to the generative provider.

use serde_json::{json, Value};

/// System instruction for the fallback provider. Describes the document
/// schema and generation policy: section planning, copy tone, the image
/// URL convention, and the case-study key→description encoding.
pub const SYSTEM_INSTRUCTION: &str = "\
You are a UI/UX design agent. You must return a JSON object exactly matching the schema.
Logic:
1. Determine intent (industry, tone, mode).
2. Plan sections from: [\"hero\", \"credibility\", \"services\", \"workflow\", \"case_studies\", \"cta\"].
3. Generate premium copy for each section based on the industry and tone.
4. For the 'case_studies' section, populate the 'examples' object with 2-3 key-value pairs where each value describes a project outcome.
5. Provide image URLs using https://picsum.photos/1400/900?random={N}.";

/// Structured-output constraint for the fallback provider.
///
/// Only structurally load-bearing fields are constrained; the section
/// `type` stays a free string so an unrecognized kind degrades to a
/// render no-op instead of a provider-side rejection.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "meta": {
                "type": "OBJECT",
                "properties": {
                    "engine": { "type": "STRING" },
                    "brand": { "type": "STRING" },
                    "hash": { "type": "STRING" }
                },
                "required": ["engine", "hash"]
            },
            "intent": {
                "type": "OBJECT",
                "properties": {
                    "industry": { "type": "STRING" },
                    "tone": { "type": "STRING" },
                    "mode": { "type": "STRING", "enum": ["dark", "light"] },
                    "wants_trust": { "type": "BOOLEAN" },
                    "wants_case_studies": { "type": "BOOLEAN" }
                },
                "required": ["industry", "tone", "mode", "wants_trust", "wants_case_studies"]
            },
            "theme": {
                "type": "OBJECT",
                "properties": {
                    "mode": { "type": "STRING" },
                    "colors": {
                        "type": "OBJECT",
                        "properties": {
                            "primary": { "type": "STRING" },
                            "background": { "type": "STRING" },
                            "text": { "type": "STRING" }
                        },
                        "required": ["primary", "background", "text"]
                    }
                },
                "required": ["mode", "colors"]
            },
            "sections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "type": { "type": "STRING" },
                        "content": {
                            "type": "OBJECT",
                            "properties": {
                                "headline": { "type": "STRING" },
                                "subtext": { "type": "STRING" },
                                "text": { "type": "STRING" },
                                "button": { "type": "STRING" }
                            }
                        },
                        "image": { "type": "STRING" },
                        "images": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "stats": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "items": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "steps": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "examples": {
                            "type": "OBJECT",
                            "properties": {
                                "project_1": { "type": "STRING" },
                                "project_2": { "type": "STRING" }
                            },
                            "description": "Key-value pairs representing case study examples."
                        }
                    },
                    "required": ["type"]
                }
            }
        },
        "required": ["meta", "intent", "theme", "sections"]
    })
}
