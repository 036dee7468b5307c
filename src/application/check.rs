//! Tree check use case
//!
//! Loads a payload through a `TreeSource` and summarises its shape.

use serde::Serialize;

use crate::domain::entities::CategoryTree;
use crate::domain::ports::TreeSource;
use crate::error::CatpickResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeReport {
    pub source: String,
    pub roots: usize,
    pub nodes: usize,
    pub leaves: usize,
    pub depth: usize,
    /// Second-level nodes that have children of their own
    pub groups: usize,
    pub duplicates: Vec<String>,
}

impl TreeReport {
    pub fn from_tree(source: impl Into<String>, tree: &CategoryTree) -> Self {
        let groups = tree
            .roots()
            .iter()
            .flat_map(|r| r.children())
            .filter(|c| c.is_group())
            .count();

        Self {
            source: source.into(),
            roots: tree.roots().len(),
            nodes: tree.node_count(),
            leaves: tree.leaf_count(),
            depth: tree.depth(),
            groups,
            duplicates: tree.duplicate_values().to_vec(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

pub struct CheckUseCase<S: TreeSource> {
    source: S,
}

impl<S: TreeSource> CheckUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self) -> CatpickResult<TreeReport> {
        let tree = self.source.load()?;
        Ok(TreeReport::from_tree(self.source.describe(), &tree))
    }
}
