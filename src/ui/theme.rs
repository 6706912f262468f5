use crossterm::style::Color;

use treelens::domain::value_objects::ValueClass;

/// Design tokens for the Treelens terminal UI.
///
/// Design constraints:
/// - Semantic colors and value-class colors live in `colors::*`
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;

    // Leaf value classes.
    pub const STRING: Color = Color::Green;
    pub const NUMBER: Color = Color::Blue;
    pub const BOOLEAN: Color = Color::Magenta;
    pub const NULL: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";

    // Tree expansion.
    pub const EXPANDED: &str = "▾";
    pub const COLLAPSED: &str = "▸";

    pub const MORE: &str = "…";
    pub const DEEPER: &str = "⤓";
    pub const SEARCH: &str = "⌕";
    pub const RULE: &str = "─";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";

    // Tree expansion.
    pub const EXPANDED: &str = "[-]";
    pub const COLLAPSED: &str = "[+]";

    pub const MORE: &str = "...";
    pub const DEEPER: &str = "[v]";
    pub const SEARCH: &str = "/";
    pub const RULE: &str = "-";
}

/// Color for a leaf of the given class (`None` for containers)
pub fn value_color(class: ValueClass) -> Option<Color> {
    match class {
        ValueClass::String => Some(colors::STRING),
        ValueClass::Number => Some(colors::NUMBER),
        ValueClass::Boolean => Some(colors::BOOLEAN),
        ValueClass::Null => Some(colors::NULL),
        ValueClass::None => None,
    }
}

/// Expansion marker for a container header
pub fn expansion_icon(open: bool, supports_unicode: bool) -> &'static str {
    match (supports_unicode, open) {
        (true, true) => icons::EXPANDED,
        (true, false) => icons::COLLAPSED,
        (false, true) => icons_ascii::EXPANDED,
        (false, false) => icons_ascii::COLLAPSED,
    }
}

/// Theme for dialoguer prompts (overwrite confirmation)
pub fn prompt_theme() -> dialoguer::theme::ColorfulTheme {
    dialoguer::theme::ColorfulTheme::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_icons_have_ascii_fallbacks() {
        assert_eq!(expansion_icon(true, true), "▾");
        assert_eq!(expansion_icon(false, true), "▸");
        assert_eq!(expansion_icon(true, false), "[-]");
        assert_eq!(expansion_icon(false, false), "[+]");
    }

    #[test]
    fn containers_have_no_value_color() {
        assert_eq!(value_color(ValueClass::None), None);
        assert_eq!(value_color(ValueClass::Number), Some(colors::NUMBER));
    }
}
