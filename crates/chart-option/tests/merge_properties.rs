//! Property-based tests for the default-option merge

use chart_option::{resolve_defaults, OptionMap, OptionValue};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = OptionValue> {
    prop_oneof![
        Just(OptionValue::Null),
        Just(OptionValue::Placeholder),
        any::<bool>().prop_map(OptionValue::Bool),
        (-1000i32..1000).prop_map(OptionValue::from),
        "[a-z#0-9%]{0,8}".prop_map(OptionValue::from),
    ]
}

fn value() -> impl Strategy<Value = OptionValue> {
    leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(OptionValue::Array),
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|m| OptionValue::Map(m.into_iter().collect())),
        ]
    })
}

fn option_map() -> impl Strategy<Value = OptionMap> {
    prop::collection::btree_map("[a-f]", value(), 0..6).prop_map(|m| m.into_iter().collect())
}

/// Resolving against an empty override gives back the base
#[test]
fn test_empty_override_is_identity() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&option_map(), |base| {
            let resolved = resolve_defaults(&base, &OptionMap::new());
            prop_assert_eq!(resolved, base);
            Ok(())
        })
        .unwrap();
}

/// Every non-nested override value lands in the result as-is
#[test]
fn test_override_takes_precedence() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(option_map(), option_map()), |(base, overlay)| {
            let resolved = resolve_defaults(&base, &overlay);

            for (key, value) in &overlay {
                let nested = value.is_map() && base.raw(key).is_some_and(OptionValue::is_map);
                if !nested {
                    prop_assert_eq!(resolved.raw(key), Some(value));
                }
            }
            Ok(())
        })
        .unwrap();
}

/// The result holds the union of base and override keys
#[test]
fn test_result_keeps_all_keys() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(option_map(), option_map()), |(base, overlay)| {
            let resolved = resolve_defaults(&base, &overlay);

            for key in base.keys().chain(overlay.keys()) {
                prop_assert!(resolved.contains_key(key), "missing key {}", key);
            }
            for key in resolved.keys() {
                prop_assert!(base.contains_key(key) || overlay.contains_key(key));
            }
            Ok(())
        })
        .unwrap();
}

/// Applying the same override twice changes nothing
#[test]
fn test_reapplying_override_is_stable() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(option_map(), option_map()), |(base, overlay)| {
            let once = resolve_defaults(&base, &overlay);
            let twice = resolve_defaults(&once, &overlay);
            prop_assert_eq!(twice, once);
            Ok(())
        })
        .unwrap();
}
