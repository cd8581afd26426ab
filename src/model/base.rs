//! Base data-zoom schema
//!
//! Defaults shared by every data-zoom variant. Axis links and span limits
//! are declared as explicitly unset so that every variant's resolved
//! default carries the full key set.

use std::sync::OnceLock;

use chart_option::{option_map, OptionMap, OptionValue};

/// Default filtering applied to series outside the window
pub const DEFAULT_FILTER_MODE: &str = "filter";

/// The shared data-zoom default option
pub fn base_option() -> &'static OptionMap {
    static BASE: OnceLock<OptionMap> = OnceLock::new();
    BASE.get_or_init(build_base_option)
}

fn build_base_option() -> OptionMap {
    option_map! {
        "z" => 4,

        "filterMode" => DEFAULT_FILTER_MODE,

        // Window in percent of the data extent
        "start" => 0,
        "end" => 100,

        // Window in data values, takes precedence over start/end when set
        "startValue" => OptionValue::Null,
        "endValue" => OptionValue::Null,

        // Linked axes, decided from the chart when unset
        "xAxisIndex" => OptionValue::Null,
        "yAxisIndex" => OptionValue::Null,
        "radiusAxisIndex" => OptionValue::Null,
        "angleAxisIndex" => OptionValue::Null,
        "orient" => OptionValue::Null,

        "zoomLock" => OptionValue::Null,
        "throttle" => OptionValue::Null,
        "rangeMode" => OptionValue::Null,

        "minSpan" => OptionValue::Null,
        "maxSpan" => OptionValue::Null,
        "minValueSpan" => OptionValue::Null,
        "maxValueSpan" => OptionValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_values() {
        let base = base_option();
        assert_eq!(base.get_f64("z"), Some(4.0));
        assert_eq!(base.get_str("filterMode"), Some("filter"));
        assert_eq!(base.get_f64("start"), Some(0.0));
        assert_eq!(base.get_f64("end"), Some(100.0));
    }

    #[test]
    fn test_axis_links_present_but_unset() {
        let base = base_option();
        for key in ["xAxisIndex", "yAxisIndex", "orient", "zoomLock"] {
            assert!(base.contains_key(key), "{key} should be declared");
            assert!(base.is_unset(key), "{key} should be unset");
        }
    }

    #[test]
    fn test_built_once() {
        assert!(std::ptr::eq(base_option(), base_option()));
    }
}
