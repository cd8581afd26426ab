//! Data-zoom slider option model
//!
//! This crate defines the default option of the slider data-zoom component
//! and how it is built: a shared base schema with the variant's override
//! merged on top, resolved once at registration and shared read-only by
//! every component instance. Position keys default to placeholders that
//! the box-layout stage fills from the plotting area.

pub mod instance;
pub mod layout;
pub mod logging;
pub mod model;
pub mod options;
pub mod registry;
pub mod style;

pub use chart_option::{option_map, resolve_defaults, OptionMap, OptionValue};
pub use instance::ComponentOption;
pub use layout::{LayoutMode, Orient, Rect, Size};
pub use model::{base_option, SliderZoomModel, ZoomVariant};
pub use options::{OptionsError, OptionsFile};
pub use registry::{ComponentRegistry, RegisteredComponent, RegistryError};
pub use style::State;
