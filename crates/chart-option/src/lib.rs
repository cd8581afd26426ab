//! Chart Option Values
//!
//! Defines the option value model shared by chart components and the
//! default-inheritance merge that derives a component's default option
//! from a base schema plus a variant override.

pub mod convert;
pub mod merge;
pub mod value;

pub use merge::{deep_merge, merge_layers, resolve_defaults};
pub use value::{OptionMap, OptionValue};

/// Key of the reserved JSON object used to encode a placeholder.
pub const PLACEHOLDER_KEY: &str = "$placeholder";

/// Build an [`OptionMap`] from `key => value` pairs.
///
/// Values go through `OptionValue::from`, so scalars, nested maps and
/// `OptionValue::Placeholder` / `OptionValue::Null` can be mixed freely.
#[macro_export]
macro_rules! option_map {
    () => {
        $crate::OptionMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::OptionMap::new();
        $(
            map.insert($key, $crate::OptionValue::from($value));
        )+
        map
    }};
}
