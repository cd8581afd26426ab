//! Interaction-state style composition
//!
//! Style groups such as `handleStyle` are stored twice: the normal group at
//! the top level and a partial state group under `emphasis`. The two stay
//! separate in the option; the effective state style is composed on read.

use chart_option::{resolve_defaults, OptionMap};

/// Interaction state of a styled element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Normal,
    /// Hovered or dragged
    Emphasis,
}

impl State {
    /// Key of the state's override block, if the state has one
    pub fn key(&self) -> Option<&'static str> {
        match self {
            State::Normal => None,
            State::Emphasis => Some("emphasis"),
        }
    }
}

/// Effective style of `group` (a dot path, e.g. `dataBackground.lineStyle`) in `state`.
pub fn state_style(option: &OptionMap, group: &str, state: State) -> OptionMap {
    let normal = option.get_map(group).cloned().unwrap_or_default();

    let state_group = state
        .key()
        .and_then(|key| option.get_map(&format!("{key}.{group}")));

    match state_group {
        Some(overrides) => resolve_defaults(&normal, overrides),
        None => normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_option::option_map;

    fn option() -> OptionMap {
        option_map! {
            "handleStyle" => option_map! {
                "color" => "#FFFFFF",
                "borderColor" => "#ACB8D1",
            },
            "moveHandleStyle" => option_map! {
                "color" => "#8FB0F7",
                "opacity" => 0.5,
            },
            "emphasis" => option_map! {
                "handleStyle" => option_map! { "borderColor" => "#8FB0F7" },
                "moveHandleStyle" => option_map! { "opacity" => 0.8 },
            },
        }
    }

    #[test]
    fn test_normal_state_is_the_group() {
        let style = state_style(&option(), "handleStyle", State::Normal);
        assert_eq!(style.get_str("borderColor"), Some("#ACB8D1"));
        assert_eq!(style.get_str("color"), Some("#FFFFFF"));
    }

    #[test]
    fn test_emphasis_keeps_unrelated_normal_keys() {
        let style = state_style(&option(), "handleStyle", State::Emphasis);
        assert_eq!(style.get_str("borderColor"), Some("#8FB0F7"));
        assert_eq!(style.get_str("color"), Some("#FFFFFF"));

        let style = state_style(&option(), "moveHandleStyle", State::Emphasis);
        assert_eq!(style.get_f64("opacity"), Some(0.8));
        assert_eq!(style.get_str("color"), Some("#8FB0F7"));
    }

    #[test]
    fn test_groups_stay_separate() {
        let option = option();
        let _ = state_style(&option, "handleStyle", State::Emphasis);
        assert_eq!(option.get_str("handleStyle.borderColor"), Some("#ACB8D1"));
        assert_eq!(option.get_str("emphasis.handleStyle.borderColor"), Some("#8FB0F7"));
        assert!(option.get_path("emphasis.handleStyle.color").is_none());
    }

    #[test]
    fn test_missing_group() {
        let style = state_style(&option(), "brushStyle", State::Emphasis);
        assert!(style.is_empty());
    }
}
