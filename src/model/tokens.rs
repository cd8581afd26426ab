//! Design tokens used by the built-in component defaults

/// Color tokens
pub mod color {
    pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
    pub const NEUTRAL_00: &str = "#FFFFFF";
    pub const TERTIARY: &str = "#6E7079";
    pub const ACCENT_10: &str = "#D2DBEE";
    pub const ACCENT_20: &str = "#ACB8D1";
    pub const ACCENT_30: &str = "#A7B7CC";
    pub const ACCENT_40: &str = "#8FB0F7";
}
