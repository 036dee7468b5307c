//! Level aggregation rules
//!
//! Both rules look at second-level nodes only (children of a root). The
//! taxonomy is three levels deep; deeper groups are not aggregated.

use crate::domain::entities::{CategoryNode, CategoryTree};

/// Whether the second-level node carrying `target` has children.
///
/// Only children of roots are inspected. A value found at any other depth,
/// or not found at all, yields `false`.
pub fn is_intermediate_node_with_children(roots: &[CategoryNode], target: &str) -> bool {
    for root in roots {
        for child in root.children() {
            if child.value() == target {
                return child.is_group();
            }
        }
    }
    false
}

/// Append the value of every second-level node whose leaves are all selected.
///
/// `selected` keeps its order; inferred values follow it, each once. Call on
/// every change with the current selection: nothing is cached between calls.
pub fn add_aggregate_selections<S: AsRef<str>>(
    roots: &[CategoryNode],
    selected: &[S],
) -> Vec<String> {
    let mut result: Vec<String> = selected.iter().map(|s| s.as_ref().to_string()).collect();
    let is_selected = |value: &str| selected.iter().any(|s| s.as_ref() == value);

    for root in roots {
        for child in root.children() {
            let leaves = child.children();
            if leaves.is_empty() || !leaves.iter().all(|leaf| is_selected(leaf.value())) {
                continue;
            }
            if !result.iter().any(|v| v == child.value()) {
                result.push(child.value().to_string());
            }
        }
    }

    result
}

impl CategoryTree {
    pub fn is_intermediate_node_with_children(&self, target: &str) -> bool {
        is_intermediate_node_with_children(self.roots(), target)
    }

    pub fn add_aggregate_selections<S: AsRef<str>>(&self, selected: &[S]) -> Vec<String> {
        add_aggregate_selections(self.roots(), selected)
    }
}
