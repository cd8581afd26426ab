//! Box layout
//!
//! Turns the `left/right/top/bottom/width/height` keys of a component
//! option into a concrete rectangle inside the chart container. Keys that
//! still hold a placeholder must be filled from the layout context first
//! (see [`location`]); a placeholder that reaches [`layout_rect`] is
//! treated as unset.

pub mod location;

pub use location::{default_location, resolve_box_layout, DefaultLocation};

use chart_option::{OptionMap, OptionValue};
use serde::{Deserialize, Serialize};

/// How the layout stage places a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Positioned by left/right/top/bottom/width/height against a container
    Box,
    /// Placed by the component itself
    None,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Box => "box",
            LayoutMode::None => "none",
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Slider orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orient {
    #[default]
    Horizontal,
    Vertical,
}

impl Orient {
    /// Orientation from the option's `orient` key (horizontal unless `"vertical"`)
    pub fn from_option(option: &OptionMap) -> Self {
        match option.get_str("orient") {
            Some("vertical") => Orient::Vertical,
            _ => Orient::Horizontal,
        }
    }
}

/// Container size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Plotting area assumed when the chart has no coordinate system to align to
    pub fn fallback_coord_rect(container: Size) -> Self {
        Self::new(
            container.width * 0.2,
            container.height * 0.2,
            container.width * 0.6,
            container.height * 0.6,
        )
    }
}

/// One box-layout position value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutValue {
    Unset,
    Placeholder,
    Pixels(f64),
    /// Percent of the container extent along the same axis
    Percent(f64),
    /// `center` / `middle`
    Center,
}

impl LayoutValue {
    pub fn from_option(value: Option<&OptionValue>) -> Self {
        match value {
            Some(OptionValue::Placeholder) => LayoutValue::Placeholder,
            Some(OptionValue::Number(n)) => LayoutValue::Pixels(*n),
            Some(OptionValue::String(s)) => Self::parse(s),
            _ => LayoutValue::Unset,
        }
    }

    fn parse(s: &str) -> Self {
        let s = s.trim();
        if matches!(s, "center" | "middle") {
            return LayoutValue::Center;
        }
        if let Some(percent) = s.strip_suffix('%') {
            return percent
                .trim()
                .parse()
                .map(LayoutValue::Percent)
                .unwrap_or(LayoutValue::Unset);
        }
        s.parse().map(LayoutValue::Pixels).unwrap_or(LayoutValue::Unset)
    }

    /// Pixel value against a container extent, if this is a concrete length
    pub fn to_pixels(self, extent: f64) -> Option<f64> {
        match self {
            LayoutValue::Pixels(px) => Some(px),
            LayoutValue::Percent(p) => Some(extent * p / 100.0),
            _ => None,
        }
    }
}

/// The six box-layout keys read from a component option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub left: LayoutValue,
    pub right: LayoutValue,
    pub top: LayoutValue,
    pub bottom: LayoutValue,
    pub width: LayoutValue,
    pub height: LayoutValue,
}

impl LayoutParams {
    pub fn from_option(option: &OptionMap) -> Self {
        Self {
            left: LayoutValue::from_option(option.get("left")),
            right: LayoutValue::from_option(option.get("right")),
            top: LayoutValue::from_option(option.get("top")),
            bottom: LayoutValue::from_option(option.get("bottom")),
            width: LayoutValue::from_option(option.get("width")),
            height: LayoutValue::from_option(option.get("height")),
        }
    }

    /// Replace placeholder entries with the context-derived defaults.
    ///
    /// Concrete values the user supplied are left as they are.
    pub fn fill_placeholders(&mut self, defaults: &DefaultLocation) {
        let fill = |slot: &mut LayoutValue, px: f64| {
            if *slot == LayoutValue::Placeholder {
                *slot = LayoutValue::Pixels(px);
            }
        };
        fill(&mut self.right, defaults.right);
        fill(&mut self.top, defaults.top);
        fill(&mut self.width, defaults.width);
        fill(&mut self.height, defaults.height);
    }

    pub fn has_placeholder(&self) -> bool {
        [
            self.left,
            self.right,
            self.top,
            self.bottom,
            self.width,
            self.height,
        ]
        .contains(&LayoutValue::Placeholder)
    }
}

/// Resolve box-layout parameters into a rectangle inside `container`.
pub fn layout_rect(params: &LayoutParams, container: Size) -> Rect {
    let (x, width) = resolve_axis(params.left, params.right, params.width, container.width);
    let (y, height) = resolve_axis(params.top, params.bottom, params.height, container.height);
    Rect::new(x, y, width, height)
}

/// Position and length along one axis from (start, end, size)
fn resolve_axis(start: LayoutValue, end: LayoutValue, size: LayoutValue, extent: f64) -> (f64, f64) {
    let start_px = start.to_pixels(extent);
    let end_px = end.to_pixels(extent);

    // Without an explicit size, span whatever the offsets leave
    let length = size
        .to_pixels(extent)
        .unwrap_or_else(|| extent - start_px.unwrap_or(0.0) - end_px.unwrap_or(0.0))
        .max(0.0);

    let centered = start == LayoutValue::Center || (start_px.is_none() && end == LayoutValue::Center);
    let position = if centered {
        (extent - length) / 2.0
    } else {
        match (start_px, end_px) {
            (Some(start), _) => start,
            (None, Some(end)) => extent - end - length,
            (None, None) => 0.0,
        }
    };

    (position, length)
}
