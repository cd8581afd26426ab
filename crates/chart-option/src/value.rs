//! Option value model
//!
//! A component option is a tree of [`OptionValue`]s keyed by strings.
//! Besides plain data it carries two markers the merge understands:
//! `Null` (an explicit unset that overrides any base default) and
//! `Placeholder` (a value the layout stage fills in later).

use std::collections::btree_map::{self, BTreeMap};

/// A single option value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionValue {
    /// Explicitly unset. Wins over any base value, including on later merges.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Replaced wholesale on merge
    Array(Vec<OptionValue>),
    /// Nested option group, merged key by key
    Map(OptionMap),
    /// Computed at layout time from the surrounding container
    Placeholder,
}

impl OptionValue {
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, OptionValue::Placeholder)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, OptionValue::Map(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[OptionValue]> {
        match self {
            OptionValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&OptionMap> {
        match self {
            OptionValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Null => "null",
            OptionValue::Bool(_) => "bool",
            OptionValue::Number(_) => "number",
            OptionValue::String(_) => "string",
            OptionValue::Array(_) => "array",
            OptionValue::Map(_) => "map",
            OptionValue::Placeholder => "placeholder",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(n: $ty) -> Self {
                    OptionValue::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i32, i64, u32, u64, usize);

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::String(s)
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(items: Vec<OptionValue>) -> Self {
        OptionValue::Array(items)
    }
}

impl From<OptionMap> for OptionValue {
    fn from(map: OptionMap) -> Self {
        OptionValue::Map(map)
    }
}

/// A mapping from option names to values
///
/// Keys are kept sorted so that serialized options are stable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionMap {
    entries: BTreeMap<String, OptionValue>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.entries.remove(key)
    }

    /// Effective value of `key`
    ///
    /// Returns `None` both for absent keys and for tombstoned (`Null`) keys.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key).filter(|v| !v.is_null())
    }

    /// Stored value of `key`, tombstones included
    pub fn raw(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True if `key` is present and explicitly unset
    pub fn is_unset(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(OptionValue::is_null)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, OptionValue> {
        self.entries.iter()
    }

    /// Stored value at a dot-separated path (e.g. `emphasis.handleStyle.borderColor`)
    pub fn raw_path(&self, path: &str) -> Option<&OptionValue> {
        let mut parts = path.split('.');
        let first = parts.next()?;
        let mut current = self.raw(first)?;
        for part in parts {
            current = current.as_map()?.raw(part)?;
        }
        Some(current)
    }

    /// Effective value at a dot-separated path
    pub fn get_path(&self, path: &str) -> Option<&OptionValue> {
        self.raw_path(path).filter(|v| !v.is_null())
    }

    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get_path(path).and_then(OptionValue::as_f64)
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get_path(path).and_then(OptionValue::as_str)
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get_path(path).and_then(OptionValue::as_bool)
    }

    pub fn get_map(&self, path: &str) -> Option<&OptionMap> {
        self.get_path(path).and_then(OptionValue::as_map)
    }
}

impl IntoIterator for OptionMap {
    type Item = (String, OptionValue);
    type IntoIter = btree_map::IntoIter<String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OptionMap {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = btree_map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_map;

    #[test]
    fn test_get_hides_tombstones() {
        let map = option_map! {
            "left" => OptionValue::Null,
            "right" => 10,
        };

        assert!(map.get("left").is_none());
        assert!(map.contains_key("left"));
        assert!(map.is_unset("left"));
        assert_eq!(map.raw("left"), Some(&OptionValue::Null));
        assert_eq!(map.get_f64("right"), Some(10.0));
        assert!(!map.is_unset("right"));
    }

    #[test]
    fn test_path_access() {
        let map = option_map! {
            "emphasis" => option_map! {
                "handleStyle" => option_map! { "borderColor" => "#8FB0F7" },
            },
        };

        assert_eq!(map.get_str("emphasis.handleStyle.borderColor"), Some("#8FB0F7"));
        assert!(map.get_path("emphasis.handleStyle.color").is_none());
        assert!(map.get_path("emphasis.missing.color").is_none());
        assert!(map.get_map("emphasis.handleStyle").is_some());
    }

    #[test]
    fn test_path_through_scalar_is_none() {
        let map = option_map! { "handleSize" => "100%" };
        assert!(map.get_path("handleSize.width").is_none());
    }

    #[test]
    fn test_placeholder_is_a_distinct_kind() {
        let map = option_map! {
            "width" => OptionValue::Placeholder,
            "label" => "ph",
        };

        assert!(map.get("width").unwrap().is_placeholder());
        assert!(!map.get("label").unwrap().is_placeholder());
        assert_eq!(map.get("width").unwrap().kind(), "placeholder");
        assert!(map.get_str("width").is_none());
        assert!(map.get_f64("width").is_none());
    }

    #[test]
    fn test_from_iterator() {
        let map: OptionMap = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
