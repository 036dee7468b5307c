//! Per-node selection state derived from a picker.
//!
//! The picker only stores values; the tri-state checkbox shown for a group
//! is computed from its descendant leaves on every render.

use catpick::application::{MultiPicker, SinglePicker};
use catpick::domain::entities::CategoryNode;

/// Selection state for a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Node (or all its leaves) selected
    Selected,
    /// Nothing under the node selected
    Unselected,
    /// Some but not all leaves selected
    Partial,
}

/// Values of every leaf under `node` (the node itself if it is a leaf)
pub fn leaf_values(node: &CategoryNode) -> Vec<&str> {
    if node.is_leaf() {
        return vec![node.value()];
    }
    node.children().iter().flat_map(leaf_values).collect()
}

pub fn multi_state(node: &CategoryNode, picker: &MultiPicker) -> SelectionState {
    if picker.is_selected(node.value()) {
        return SelectionState::Selected;
    }
    if node.is_leaf() {
        return SelectionState::Unselected;
    }

    let leaves = leaf_values(node);
    let selected = leaves.iter().filter(|v| picker.is_selected(v)).count();
    if selected == 0 {
        SelectionState::Unselected
    } else if selected == leaves.len() {
        SelectionState::Selected
    } else {
        SelectionState::Partial
    }
}

pub fn single_state(node: &CategoryNode, picker: &SinglePicker) -> SelectionState {
    let Some(picked) = picker.value() else {
        return SelectionState::Unselected;
    };
    if node.value() == picked {
        SelectionState::Selected
    } else if contains_descendant(node, picked) {
        SelectionState::Partial
    } else {
        SelectionState::Unselected
    }
}

fn contains_descendant(node: &CategoryNode, value: &str) -> bool {
    node.children()
        .iter()
        .any(|c| c.value() == value || contains_descendant(c, value))
}

/// Toggle a node in a multi picker: leaves flip, groups select or clear all
/// of their leaves.
pub fn toggle_multi(node: &CategoryNode, picker: &mut MultiPicker) {
    if node.is_leaf() {
        toggle_logged(picker, node.value());
        return;
    }

    let clear = multi_state(node, picker) == SelectionState::Selected;
    if clear && picker.is_selected(node.value()) {
        toggle_logged(picker, node.value());
    }
    for leaf in leaf_values(node) {
        if picker.is_selected(leaf) == clear {
            toggle_logged(picker, leaf);
        }
    }
}

fn toggle_logged(picker: &mut MultiPicker, value: &str) {
    if let Err(e) = picker.toggle(value) {
        tracing::warn!(error = %e, "toggle ignored");
    }
}
