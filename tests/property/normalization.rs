//! Property-based tests for normalization totality guarantees

use pageforge::normalize::{extract, resolve_field};
use proptest::prelude::*;
use serde_json::Value;

/// Arbitrary JSON values: scalars at the leaves, arrays and objects up to
/// a bounded depth.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 _%+-]{0,16}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,10}", inner), 0..6).prop_map(|pairs| {
                Value::Object(pairs.into_iter().collect())
            }),
        ]
    })
}

/// Normalization is total: any JSON value reduces to a string without
/// panicking, and the result never looks like a serialized structure.
#[test]
fn test_extract_total_over_arbitrary_json() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&arb_json(), |value| {
            let text = extract(&value);

            // Objects and arrays never leak as raw structure
            if value.is_object() || value.is_array() {
                prop_assert!(!text.starts_with('{'), "text must not start with an object brace");
                prop_assert!(!text.starts_with('['), "text must not start with an array bracket");
            }

            Ok(())
        })
        .unwrap();
}

/// Extracting an already-extracted value is the identity.
#[test]
fn test_extract_idempotent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&arb_json(), |value| {
            let once = extract(&value);
            let twice = extract(&Value::String(once.clone()));
            prop_assert_eq!(once, twice);
            Ok(())
        })
        .unwrap();
}

/// Field resolution is total over arbitrary content maps and key lists,
/// and an absent map always yields the supplied default.
#[test]
fn test_resolve_field_total_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let strategy = (
        prop::collection::vec(("[a-z]{1,10}", arb_json()), 0..6),
        prop::collection::vec("[a-z]{1,10}", 0..4),
        "[a-zA-Z ]{0,12}",
    );

    runner
        .run(&strategy, |(pairs, keys, default)| {
            let map: serde_json::Map<String, Value> = pairs.into_iter().collect();
            let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();

            let resolved = resolve_field(Some(&map), &key_refs, &default);
            if map.is_empty() {
                prop_assert_eq!(&resolved, &default);
            }

            let absent = resolve_field(None, &key_refs, &default);
            prop_assert_eq!(absent, default);
            Ok(())
        })
        .unwrap();
}
