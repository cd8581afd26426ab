//! Default-option merge logic
//!
//! A variant's default option is its base schema with the variant
//! override merged on top:
//! - Maps: deep-merge by key (recursive)
//! - Arrays: REPLACE (override wins entirely)
//! - Scalars and placeholders: override wins
//! - Null: override wins and stays as a tombstone

use crate::value::{OptionMap, OptionValue};

/// Resolve a variant's default option from a base schema and an override.
///
/// Keys only in `base` pass through, keys in `overlay` take precedence at
/// every level of nesting. A shape mismatch (map over scalar, scalar over
/// map) is resolved by the override replacing the base value wholesale.
/// The result is a fresh value that shares nothing with either input.
pub fn resolve_defaults(base: &OptionMap, overlay: &OptionMap) -> OptionMap {
    merge_maps(base.clone(), overlay.clone())
}

/// Deep merge two option values.
pub fn deep_merge(base: OptionValue, overlay: OptionValue) -> OptionValue {
    match (base, overlay) {
        (OptionValue::Map(base_map), OptionValue::Map(overlay_map)) => {
            OptionValue::Map(merge_maps(base_map, overlay_map))
        }

        // Everything else, tombstones and placeholders included: overlay wins
        (_, overlay) => overlay,
    }
}

/// Merge option layers in order (first is base, last has highest precedence)
pub fn merge_layers<I>(layers: I) -> OptionMap
where
    I: IntoIterator<Item = OptionMap>,
{
    layers.into_iter().fold(OptionMap::new(), merge_maps)
}

fn merge_maps(mut base: OptionMap, overlay: OptionMap) -> OptionMap {
    for (key, overlay_value) in overlay {
        let merged = match base.remove(&key) {
            Some(base_value) => deep_merge(base_value, overlay_value),
            None => overlay_value,
        };
        base.insert(key, merged);
    }
    base
}
