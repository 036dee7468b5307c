//! Shortcut chips
//!
//! A shortcut is bound to a category label rather than a value. Clicking it
//! behaves exactly like toggling that category's checkbox in the tree.

use crate::domain::entities::{CategoryNode, CategoryTree};
use crate::domain::value_objects::Selection;
use crate::error::{CatpickError, CatpickResult};

/// Resolve a shortcut label to its tree node (first match, depth-first)
pub fn resolve_shortcut<'a>(
    tree: &'a CategoryTree,
    label: &str,
) -> CatpickResult<&'a CategoryNode> {
    tree.find_by_name(label)
        .ok_or_else(|| CatpickError::UnknownShortcut {
            label: label.to_string(),
        })
}

/// Toggle the category behind `label` in `selection`.
///
/// Returns the new selection; an unknown label is an error and the input is
/// left as is.
pub fn toggle_shortcut(
    tree: &CategoryTree,
    label: &str,
    selection: &Selection,
) -> CatpickResult<Selection> {
    let node = resolve_shortcut(tree, label)?;
    let mut next = selection.clone();
    next.toggle(node.value());
    tracing::debug!(label, value = node.value(), "shortcut toggled");
    Ok(next)
}
