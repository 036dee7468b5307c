//! TreeMenu state management and action handling.
//!
//! This module contains the main TreeMenu component that manages
//! the view state (cursor, expansion, search), forwards selections to the
//! picker, and coordinates rendering.

use std::collections::HashSet;
use std::sync::Arc;

use catpick::application::{MultiPicker, SinglePicker};
use catpick::domain::entities::{CategoryNode, CategoryTree};

use super::render::{render_header, render_help_bar, render_status_bar, render_tree_node};
use super::state::{multi_state, single_state, toggle_multi, SelectionState};

/// A flattened representation of a tree node for rendering
#[derive(Debug, Clone)]
pub struct FlattenedNode {
    /// Category value
    pub value: String,
    /// Depth level (0 = root)
    pub depth: usize,
    /// Display label (breadcrumb while searching)
    pub label: String,
    /// Selection state
    pub state: SelectionState,
    /// Whether this node is expanded (for non-leaves)
    pub expanded: bool,
    /// Whether this node has children
    pub has_children: bool,
    /// Leaf count for this subtree
    pub leaf_count: usize,
}

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle selection
    Toggle,
    /// Expand node
    Expand,
    /// Collapse node
    Collapse,
    /// Clear the selection
    SelectNone,
    /// Start typing a search query
    StartSearch,
    /// Append a character to the query
    SearchInput(char),
    /// Delete the last query character
    SearchBackspace,
    /// Leave search and clear the query
    ClearSearch,
    /// Toggle the n-th configured shortcut
    Shortcut(usize),
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// A shortcut chip bound to a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuShortcut {
    pub label: String,
    pub key: char,
}

/// The picker a menu drives
#[derive(Debug, Clone)]
pub enum PickerMode {
    Multi(MultiPicker),
    Single(SinglePicker),
}

/// Interactive tree menu for selecting categories
pub struct TreeMenu {
    tree: Arc<CategoryTree>,
    mode: PickerMode,
    expanded: HashSet<String>,
    shortcuts: Vec<MenuShortcut>,
    /// Current cursor position in flattened view
    pub cursor: usize,
    searching: bool,
    /// Cached flattened nodes for rendering
    flattened: Vec<FlattenedNode>,
}

impl TreeMenu {
    /// Create a new tree menu over the picker's tree
    pub fn new(tree: Arc<CategoryTree>, mode: PickerMode) -> Self {
        let mut menu = Self {
            tree,
            mode,
            expanded: HashSet::new(),
            shortcuts: Vec::new(),
            cursor: 0,
            searching: false,
            flattened: Vec::new(),
        };
        menu.rebuild_flattened();
        menu
    }

    pub fn with_shortcuts(mut self, shortcuts: Vec<MenuShortcut>) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    pub fn shortcuts(&self) -> &[MenuShortcut] {
        &self.shortcuts
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn query(&self) -> &str {
        match &self.mode {
            PickerMode::Multi(p) => p.query(),
            PickerMode::Single(p) => p.query(),
        }
    }

    pub fn header_shown(&self) -> bool {
        match &self.mode {
            PickerMode::Multi(p) => p.header().is_shown(),
            PickerMode::Single(p) => p.header().is_shown(),
        }
    }

    /// Rebuild the flattened node list
    pub fn rebuild_flattened(&mut self) {
        self.flattened = if self.query().is_empty() {
            let mut out = Vec::new();
            for root in self.tree.roots() {
                self.flatten_node(root, 0, &mut out);
            }
            out
        } else {
            self.flatten_hits()
        };

        // Ensure cursor is within bounds
        if self.flattened.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.flattened.len() {
            self.cursor = self.flattened.len() - 1;
        }
    }

    fn flatten_node(&self, node: &CategoryNode, depth: usize, out: &mut Vec<FlattenedNode>) {
        let expanded = self.expanded.contains(node.value());
        out.push(FlattenedNode {
            value: node.value().to_string(),
            depth,
            label: node.name().to_string(),
            state: self.state_of(node),
            expanded,
            has_children: node.is_group(),
            leaf_count: super::state::leaf_values(node).len(),
        });

        if expanded {
            for child in node.children() {
                self.flatten_node(child, depth + 1, out);
            }
        }
    }

    fn flatten_hits(&self) -> Vec<FlattenedNode> {
        let hits = self.tree.search(self.query());
        hits.into_iter()
            .filter_map(|hit| {
                let node = self.tree.find(hit.value)?;
                Some(FlattenedNode {
                    value: hit.value.to_string(),
                    depth: 0,
                    label: hit.path.join(" > "),
                    state: self.state_of(node),
                    expanded: false,
                    has_children: !hit.is_leaf,
                    leaf_count: super::state::leaf_values(node).len(),
                })
            })
            .collect()
    }

    fn state_of(&self, node: &CategoryNode) -> SelectionState {
        match &self.mode {
            PickerMode::Multi(p) => multi_state(node, p),
            PickerMode::Single(p) => single_state(node, p),
        }
    }

    /// Get flattened nodes for rendering
    pub fn flattened_nodes(&self) -> &[FlattenedNode] {
        &self.flattened
    }

    /// Get current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn current_value(&self) -> Option<String> {
        self.flattened.get(self.cursor).map(|n| n.value.clone())
    }

    fn set_query(&mut self, query: String) {
        match &mut self.mode {
            PickerMode::Multi(p) => p.set_query(query),
            PickerMode::Single(p) => p.set_query(query),
        }
        self.cursor = 0;
    }

    /// Handle a tree action. Returns true when the menu should close.
    pub fn handle_action(&mut self, action: TreeAction) -> bool {
        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.flattened.len() {
                    self.cursor += 1;
                }
                false
            }
            TreeAction::Toggle => {
                if let Some(value) = self.current_value() {
                    self.toggle_value(&value);
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Expand => {
                if let Some(node) = self.flattened.get(self.cursor) {
                    if node.has_children && self.query().is_empty() {
                        self.expanded.insert(node.value.clone());
                    }
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Collapse => {
                if let Some(value) = self.current_value() {
                    self.expanded.remove(&value);
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::SelectNone => {
                match &mut self.mode {
                    PickerMode::Multi(p) => p.clear(),
                    PickerMode::Single(p) => p.clear(),
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::StartSearch => {
                self.searching = true;
                false
            }
            TreeAction::SearchInput(c) => {
                let mut query = self.query().to_string();
                query.push(c);
                self.set_query(query);
                self.rebuild_flattened();
                false
            }
            TreeAction::SearchBackspace => {
                let mut query = self.query().to_string();
                query.pop();
                self.set_query(query);
                self.rebuild_flattened();
                false
            }
            TreeAction::ClearSearch => {
                self.searching = false;
                self.set_query(String::new());
                self.rebuild_flattened();
                false
            }
            TreeAction::Shortcut(idx) => {
                if let (Some(shortcut), PickerMode::Multi(p)) =
                    (self.shortcuts.get(idx), &mut self.mode)
                {
                    if let Err(e) = p.toggle_shortcut(&shortcut.label) {
                        tracing::warn!(error = %e, "shortcut ignored");
                    }
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Confirm => true,
            TreeAction::Quit => true,
        }
    }

    fn toggle_value(&mut self, value: &str) {
        let Some(node) = self.tree.find(value) else {
            return;
        };
        match &mut self.mode {
            PickerMode::Multi(p) => toggle_multi(node, p),
            PickerMode::Single(p) => {
                if p.value() == Some(value) {
                    p.clear();
                } else if let Err(e) = p.pick(value) {
                    tracing::warn!(error = %e, "pick ignored");
                }
            }
        }
    }

    /// Hidden form field content for the current selection
    pub fn form_value(&self) -> String {
        match &self.mode {
            PickerMode::Multi(p) => p.form_value(),
            PickerMode::Single(p) => p.form_value(),
        }
    }

    /// Render the tree menu to a string
    pub fn render(&self, supports_unicode: bool) -> String {
        let mut out = String::new();

        out.push_str(&render_header(self, supports_unicode));
        out.push('\n');

        for (i, node) in self.flattened.iter().enumerate() {
            let is_active = i == self.cursor;
            let line = render_tree_node(node, is_active, supports_unicode);
            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    /// Render the status bar
    pub fn render_status_bar(&self, supports_unicode: bool) -> String {
        render_status_bar(&self.mode, supports_unicode)
    }

    /// Render the help bar
    pub fn render_help_bar(&self) -> String {
        render_help_bar(self.searching)
    }
}
