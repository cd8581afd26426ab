//! Slider data-zoom variant
//!
//! The slider is placed with box layout. Its position keys default to
//! placeholders (or to unset) because the final placement depends on the
//! plotting-area rectangle, which is only known at layout time.

use std::sync::OnceLock;

use chart_option::{option_map, OptionMap, OptionValue};

use super::tokens::color;
use super::ZoomVariant;
use crate::layout::LayoutMode;

const HANDLE_ICON: &str = "path://M-9.35,34.56V42m0-40V9.5m-2,0h4a2,2,0,0,1,2,2v21a2,2,0,0,1-2,2h-4a2,2,0,0,1-2-2v-21A2,2,0,0,1-11.35,9.5Z";

const MOVE_HANDLE_ICON: &str = "path://M-320.9-50L-320.9-50c18.1,0,27.1,9,27.1,27.1V85.7c0,18.1-9,27.1-27.1,27.1l0,0c-18.1,0-27.1-9-27.1-27.1V-22.9C-348-41-339-50-320.9-50z M-212.3-50L-212.3-50c18.1,0,27.1,9,27.1,27.1V85.7c0,18.1-9,27.1-27.1,27.1l0,0c-18.1,0-27.1-9-27.1-27.1V-22.9C-239.4-41-230.4-50-212.3-50z M-103.7-50L-103.7-50c18.1,0,27.1,9,27.1,27.1V85.7c0,18.1-9,27.1-27.1,27.1l0,0c-18.1,0-27.1-9-27.1-27.1V-22.9C-130.9-41-121.8-50-103.7-50z";

/// The slider data-zoom component
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderZoomModel;

impl ZoomVariant for SliderZoomModel {
    const TYPE: &'static str = "dataZoom.slider";
    const LAYOUT_MODE: LayoutMode = LayoutMode::Box;

    fn default_option() -> &'static OptionMap {
        static DEFAULT: OnceLock<OptionMap> = OnceLock::new();
        DEFAULT.get_or_init(Self::resolve_default_option)
    }

    fn override_option() -> OptionMap {
        option_map! {
            "show" => true,

            // Aligned to the grid rect by the layout stage
            "right" => OptionValue::Placeholder,
            "top" => OptionValue::Placeholder,
            "width" => OptionValue::Placeholder,
            "height" => OptionValue::Placeholder,
            "left" => OptionValue::Null,
            "bottom" => OptionValue::Null,

            "borderColor" => color::ACCENT_10,
            "borderRadius" => 0,

            "backgroundColor" => color::TRANSPARENT,

            "dataBackground" => option_map! {
                "lineStyle" => option_map! {
                    "color" => color::ACCENT_30,
                    "width" => 0.5,
                },
                "areaStyle" => option_map! {
                    "color" => color::ACCENT_20,
                    "opacity" => 0.2,
                },
            },

            "selectedDataBackground" => option_map! {
                "lineStyle" => option_map! {
                    "color" => color::ACCENT_40,
                    "width" => 0.5,
                },
                "areaStyle" => option_map! {
                    "color" => color::ACCENT_20,
                    "opacity" => 0.3,
                },
            },

            // Color of the selected window
            "fillerColor" => "rgba(135,175,274,0.2)",
            "handleIcon" => HANDLE_ICON,
            // Percent of the slider height
            "handleSize" => "100%",

            "handleStyle" => option_map! {
                "color" => color::NEUTRAL_00,
                "borderColor" => color::ACCENT_20,
            },

            "moveHandleSize" => 7,
            "moveHandleIcon" => MOVE_HANDLE_ICON,
            "moveHandleStyle" => option_map! {
                "color" => color::ACCENT_40,
                "opacity" => 0.5,
            },

            "showDetail" => true,
            "showDataShadow" => "auto",
            "realtime" => true,
            "zoomLock" => false,

            "textStyle" => option_map! {
                "color" => color::TERTIARY,
            },

            "brushSelect" => true,
            "brushStyle" => option_map! {
                "color" => color::ACCENT_30,
                "opacity" => 0.3,
            },

            "emphasis" => option_map! {
                "handleLabel" => option_map! {
                    "show" => true,
                },
                "handleStyle" => option_map! {
                    "borderColor" => color::ACCENT_40,
                },
                "moveHandleStyle" => option_map! {
                    "opacity" => 0.8,
                },
            },

            "defaultLocationEdgeGap" => 15,
        }
    }
}
