//! Terminal rendering functions for tree menu.
//!
//! This module provides functions to render tree nodes, the search header,
//! status bars, and help text to strings for terminal output.

use crate::ui::theme::{icon, icons, icons_ascii};

use super::menu::{FlattenedNode, PickerMode, TreeMenu};
use super::state::SelectionState;

/// Render a single tree node to a string
pub fn render_tree_node(node: &FlattenedNode, is_active: bool, supports_unicode: bool) -> String {
    let indent = "  ".repeat(node.depth);
    let cursor = if is_active { "> " } else { "  " };

    let state_icon = match node.state {
        SelectionState::Selected => icon(icons::SELECTED, icons_ascii::SELECTED, supports_unicode),
        SelectionState::Unselected => {
            icon(icons::UNSELECTED, icons_ascii::UNSELECTED, supports_unicode)
        }
        SelectionState::Partial => icon(icons::PARTIAL, icons_ascii::PARTIAL, supports_unicode),
    };

    // Expansion icon (only for nodes with children)
    let expand_icon = if node.has_children {
        let glyph = if node.expanded {
            icon(icons::EXPAND, icons_ascii::EXPAND, supports_unicode)
        } else {
            icon(icons::COLLAPSE, icons_ascii::COLLAPSE, supports_unicode)
        };
        format!("{} ", glyph)
    } else {
        String::from("  ")
    };

    let count_suffix = if node.has_children && node.leaf_count > 0 {
        format!(" ({})", node.leaf_count)
    } else {
        String::new()
    };

    format!(
        "{}{}{}{} {}{}",
        cursor, indent, expand_icon, state_icon, node.label, count_suffix
    )
}

/// Header line above the options, or the search line once a query is typed
pub fn render_header(menu: &TreeMenu, supports_unicode: bool) -> String {
    let search_icon = icon(icons::SEARCH, icons_ascii::SEARCH, supports_unicode);

    if menu.header_shown() {
        let mut line = String::from("Categories");
        if !menu.shortcuts().is_empty() {
            let chips: Vec<String> = menu
                .shortcuts()
                .iter()
                .map(|s| format!("[{}] {}", s.key, s.label))
                .collect();
            line.push_str("    ");
            line.push_str(&chips.join("  "));
        }
        if menu.is_searching() {
            line.push('\n');
            line.push_str(&format!("{} ", search_icon));
        }
        line
    } else {
        format!("{} {}", search_icon, menu.query())
    }
}

/// Render the status bar: summary (multi) or breadcrumb (single), and the form value
pub fn render_status_bar(mode: &PickerMode, supports_unicode: bool) -> String {
    match mode {
        PickerMode::Multi(picker) => {
            format!(
                "Selected: {}\nForm value: {}",
                picker.summary(),
                picker.form_value()
            )
        }
        PickerMode::Single(picker) => {
            let mut out = format!(
                "Selected: {}\nForm value: {}",
                picker.breadcrumb(),
                picker.form_value()
            );
            if picker.shows_group_notice() {
                let warn = icon(icons::WARNING, icons_ascii::WARNING, supports_unicode);
                out.push_str(&format!(
                    "\n{} This is a sub-category group: it covers every category below it",
                    warn
                ));
            }
            out
        }
    }
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(searching: bool) -> String {
    if searching {
        String::from("Type to search    [Backspace] Delete    [Esc] Clear search    [Enter] Confirm")
    } else {
        String::from(
            "[/] Search    [n] None    [Enter] Confirm    [q] Quit\n\
             (Use ↑↓ to navigate, Space to toggle, →← to expand/collapse)",
        )
    }
}
