//! Single-select picker
//!
//! Picking a value renders its breadcrumb; picking a second-level group
//! raises the contextual notice shown next to the field.

use std::sync::Arc;

use crate::domain::entities::CategoryTree;
use crate::domain::services::{SearchHit, BREADCRUMB_SEPARATOR};
use crate::domain::value_objects::{HeaderVisibility, SingleSelection};
use crate::error::{CatpickError, CatpickResult};

#[derive(Debug, Clone)]
pub struct SinglePicker {
    tree: Arc<CategoryTree>,
    selection: SingleSelection,
    query: String,
    header: HeaderVisibility,
    separator: String,
}

impl SinglePicker {
    pub fn new(tree: Arc<CategoryTree>) -> Self {
        Self {
            tree,
            selection: SingleSelection::default(),
            query: String::new(),
            header: HeaderVisibility::default(),
            separator: BREADCRUMB_SEPARATOR.to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    pub fn value(&self) -> Option<&str> {
        self.selection.value()
    }

    pub fn pick(&mut self, value: &str) -> CatpickResult<()> {
        if !self.tree.contains(value) {
            return Err(CatpickError::UnknownValue {
                value: value.to_string(),
            });
        }
        self.selection.set(value);
        tracing::trace!(value, "category picked");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Breadcrumb of the picked value, empty when nothing is picked
    pub fn breadcrumb(&self) -> String {
        self.selection
            .value()
            .map(|v| self.tree.breadcrumb(v, &self.separator))
            .unwrap_or_default()
    }

    /// The picked value is a second-level group rather than a leaf
    pub fn shows_group_notice(&self) -> bool {
        self.selection
            .value()
            .is_some_and(|v| self.tree.is_intermediate_node_with_children(v))
    }

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

    pub fn form_value(&self) -> String {
        self.selection.to_form_value()
    }
}
