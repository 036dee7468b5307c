/// Design tokens for the catpick terminal UI.
///
/// All icons must be sourced from this module so the ASCII fallback stays
/// complete.
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const SEARCH: &str = "⌕";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const SEARCH: &str = "[?]";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";
}

/// Pick the unicode or ASCII variant of an icon
pub fn icon(unicode: &'static str, ascii: &'static str, supports_unicode: bool) -> &'static str {
    if supports_unicode {
        unicode
    } else {
        ascii
    }
}
