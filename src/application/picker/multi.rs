//! Multi-select picker
//!
//! Owns its selection, search query and header state. The tree is shared
//! read-only between pickers through `Arc`.

use std::sync::Arc;

use crate::domain::entities::CategoryTree;
use crate::domain::services::{toggle_shortcut, SearchHit};
use crate::domain::value_objects::{to_form_value, HeaderVisibility, Selection};
use crate::error::{CatpickError, CatpickResult};

#[derive(Debug, Clone)]
pub struct MultiPicker {
    tree: Arc<CategoryTree>,
    selection: Selection,
    query: String,
    header: HeaderVisibility,
    placeholder: String,
}

impl MultiPicker {
    pub fn new(tree: Arc<CategoryTree>) -> Self {
        Self {
            tree,
            selection: Selection::new(),
            query: String::new(),
            header: HeaderVisibility::default(),
            placeholder: String::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selection.contains(value)
    }

    /// Toggle a checkbox. Returns true when the value is now selected.
    pub fn toggle(&mut self, value: &str) -> CatpickResult<bool> {
        if !self.tree.contains(value) {
            return Err(CatpickError::UnknownValue {
                value: value.to_string(),
            });
        }
        let selected = self.selection.toggle(value);
        tracing::trace!(value, selected, "category toggled");
        Ok(selected)
    }

    /// Toggle through a shortcut chip bound to a category label
    pub fn toggle_shortcut(&mut self, label: &str) -> CatpickResult<bool> {
        self.selection = toggle_shortcut(&self.tree, label, &self.selection)?;
        let value = self
            .tree
            .find_by_name(label)
            .map(|n| n.value())
            .unwrap_or_default();
        Ok(self.selection.contains(value))
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Update the search query; the header follows it synchronously
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.header.update(&self.query);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn header(&self) -> HeaderVisibility {
        self.header
    }

    pub fn search_hits(&self) -> Vec<SearchHit<'_>> {
        self.tree.search(&self.query)
    }

    /// Summary shown in the closed picker
    pub fn summary(&self) -> String {
        self.selection.summary_or(&self.placeholder)
    }

    /// Selected values plus the groups they fully cover
    pub fn selected_values(&self) -> Vec<String> {
        self.tree.add_aggregate_selections(self.selection.values())
    }

    /// Hidden form field content
    pub fn form_value(&self) -> String {
        to_form_value(&self.selected_values())
    }

    /// Restore from a previously submitted form value.
    ///
    /// Unknown values are dropped, and so are group values implied by their
    /// leaves: they are recomputed by [`MultiPicker::form_value`].
    pub fn restore(&mut self, form_value: &str) {
        let known = self.known_values(form_value);
        let refs: Vec<&String> = known.iter().collect();

        let leaves: Vec<&String> = refs
            .iter()
            .copied()
            .filter(|v| !self.is_implied_group(v, &refs))
            .collect();

        self.selection = leaves.into_iter().cloned().collect();
    }

    /// Load a submitted selection as is, keeping order and explicit group
    /// values. Only unknown values are dropped.
    pub fn restore_submitted(&mut self, form_value: &str) {
        self.selection = self.known_values(form_value).into_iter().collect();
    }

    fn known_values(&self, form_value: &str) -> Vec<String> {
        Selection::from_form_value(form_value)
            .values()
            .iter()
            .filter(|v| {
                let known = self.tree.contains(v);
                if !known {
                    tracing::warn!(value = %v, "dropping unknown value from form");
                }
                known
            })
            .cloned()
            .collect()
    }

    fn is_implied_group(&self, value: &str, values: &[&String]) -> bool {
        if !self.tree.is_intermediate_node_with_children(value) {
            return false;
        }
        self.tree
            .find(value)
            .map(|node| {
                node.children()
                    .iter()
                    .all(|c| values.iter().any(|v| v.as_str() == c.value()))
            })
            .unwrap_or(false)
    }
}
