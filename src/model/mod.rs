//! Data-zoom component models
//!
//! A variant does not subclass the base model. It declares an override
//! option, and its default option is the base schema with that override
//! merged on top.

mod base;
mod slider;
pub mod tokens;

pub use base::{base_option, DEFAULT_FILTER_MODE};
pub use slider::SliderZoomModel;

use chart_option::{resolve_defaults, OptionMap};

use crate::layout::LayoutMode;

/// A concrete data-zoom variant
pub trait ZoomVariant {
    /// Component type tag (e.g. `dataZoom.slider`)
    const TYPE: &'static str;

    /// How the layout stage places this component
    const LAYOUT_MODE: LayoutMode;

    /// Keys this variant adds to or overrides in the base schema
    fn override_option() -> OptionMap;

    /// The variant's default option, resolved once for the process.
    ///
    /// Implementations keep their own `OnceLock`: a static inside a provided
    /// method would be shared by every variant.
    fn default_option() -> &'static OptionMap;

    /// Resolve the variant's default option from scratch
    fn resolve_default_option() -> OptionMap {
        resolve_defaults(base_option(), &Self::override_option())
    }
}
