//! Default slider location
//!
//! The slider's `right/top/width/height` default to placeholders. Here they
//! are derived from the plotting-area rectangle: a horizontal slider runs
//! under the grid with the grid's width, a vertical one runs beside it
//! with the grid's height.

use chart_option::OptionMap;

use super::{layout_rect, LayoutParams, Orient, Rect, Size};

/// Thickness of the slider filler band
pub const DEFAULT_FILLER_SIZE: f64 = 30.0;

/// Used when the option carries no `moveHandleSize`
pub const DEFAULT_MOVE_HANDLE_SIZE: f64 = 7.0;

/// Used when the option carries no `defaultLocationEdgeGap`
pub const DEFAULT_LOCATION_EDGE_GAP: f64 = 15.0;

/// Context-derived values for the placeholder keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultLocation {
    pub right: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Compute the slider's default location from the layout context.
pub fn default_location(
    option: &OptionMap,
    orient: Orient,
    container: Size,
    coord_rect: Rect,
) -> DefaultLocation {
    let edge_gap = option
        .get_f64("defaultLocationEdgeGap")
        .unwrap_or(DEFAULT_LOCATION_EDGE_GAP);

    // The move handle sits under the filler only when brushing is enabled
    let move_handle = if option.get_bool("brushSelect").unwrap_or(false) {
        option
            .get_f64("moveHandleSize")
            .unwrap_or(DEFAULT_MOVE_HANDLE_SIZE)
    } else {
        0.0
    };

    match orient {
        Orient::Horizontal => DefaultLocation {
            right: container.width - coord_rect.x - coord_rect.width,
            top: container.height - DEFAULT_FILLER_SIZE - edge_gap - move_handle,
            width: coord_rect.width,
            height: DEFAULT_FILLER_SIZE,
        },
        Orient::Vertical => DefaultLocation {
            right: edge_gap,
            top: coord_rect.y,
            width: DEFAULT_FILLER_SIZE,
            height: coord_rect.height,
        },
    }
}

/// Place a box-layout component, filling placeholders from the context.
///
/// `coord_rect` is the plotting area the slider aligns to; without one a
/// centered rectangle covering 60% of the container is assumed.
pub fn resolve_box_layout(
    option: &OptionMap,
    orient: Orient,
    container: Size,
    coord_rect: Option<Rect>,
) -> Rect {
    let coord_rect = coord_rect.unwrap_or_else(|| Rect::fallback_coord_rect(container));

    let mut params = LayoutParams::from_option(option);
    if params.has_placeholder() {
        let defaults = default_location(option, orient, container, coord_rect);
        params.fill_placeholders(&defaults);
    }

    layout_rect(&params, container)
}
