//! Per-instance component option
//!
//! An instance starts from its type's cached default with the user's
//! option merged on top. Later updates merge further layers into the
//! instance's own copy; the shared default is never touched.

use std::sync::Arc;

use chart_option::{resolve_defaults, OptionMap, OptionValue};
use tracing::debug;

use crate::layout::{resolve_box_layout, LayoutMode, Orient, Rect, Size};
use crate::registry::RegisteredComponent;
use crate::style::{state_style, State};

/// Live option of one component instance
#[derive(Debug, Clone)]
pub struct ComponentOption {
    type_tag: &'static str,
    layout_mode: LayoutMode,
    default_option: Arc<OptionMap>,
    option: OptionMap,
}

impl ComponentOption {
    /// Layer `user_option` over the registered default
    pub fn instantiate(component: &RegisteredComponent, user_option: &OptionMap) -> Self {
        let default_option = Arc::clone(component.default_option());
        let option = resolve_defaults(&default_option, user_option);
        debug!(
            type_tag = component.type_tag(),
            user_keys = user_option.len(),
            "instantiated component option"
        );

        Self {
            type_tag: component.type_tag(),
            layout_mode: component.layout_mode(),
            default_option,
            option,
        }
    }

    /// Merge a newer user layer on top of the current option
    pub fn merge_option(&mut self, newer: &OptionMap) {
        self.option = resolve_defaults(&self.option, newer);
    }

    /// Drop all user layers and start again from the registered default
    pub fn reset(&mut self, user_option: &OptionMap) {
        self.option = resolve_defaults(&self.default_option, user_option);
    }

    pub fn type_tag(&self) -> &'static str {
        self.type_tag
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn option(&self) -> &OptionMap {
        &self.option
    }

    pub fn default_option(&self) -> &OptionMap {
        &self.default_option
    }

    /// Get an effective value by dot-separated path
    pub fn get(&self, path: &str) -> Option<&OptionValue> {
        self.option.get_path(path)
    }

    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.option.get_f64(path)
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.option.get_str(path)
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.option.get_bool(path)
    }

    /// True if the value at `path` is still waiting for the layout stage
    pub fn is_placeholder(&self, path: &str) -> bool {
        self.get(path).is_some_and(OptionValue::is_placeholder)
    }

    /// Style group for an interaction state (e.g. `handleStyle` under emphasis)
    pub fn style(&self, group: &str, state: State) -> OptionMap {
        state_style(&self.option, group, state)
    }

    /// Rectangle of a box-layout component, `None` for other layout modes
    pub fn layout(&self, container: Size, coord_rect: Option<Rect>) -> Option<Rect> {
        match self.layout_mode {
            LayoutMode::Box => Some(resolve_box_layout(
                &self.option,
                Orient::from_option(&self.option),
                container,
                coord_rect,
            )),
            LayoutMode::None => None,
        }
    }
}
