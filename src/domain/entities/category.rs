//! Category tree entity
//!
//! An immutable, validated hierarchy of categories loaded once from a JSON
//! payload of `{value, name, children?}` nodes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CatpickError, CatpickResult};

/// One entry in the category hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
    value: String,
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Create a leaf node
    pub fn leaf(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a group node with the given children
    pub fn group(
        value: impl Into<String>,
        name: impl Into<String>,
        children: Vec<CategoryNode>,
    ) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            children,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[CategoryNode] {
        &self.children
    }

    /// A node with no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node with at least one child
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Wire shape of a node before validation
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    children: Option<Vec<RawNode>>,
}

/// Accepted payload layouts: a bare array or `{ "categories": [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPayload {
    List(Vec<RawNode>),
    Wrapped { categories: Vec<RawNode> },
}

impl RawNode {
    fn validate(self, location: String) -> CatpickResult<CategoryNode> {
        let value = required(self.value, "value", &location)?;
        let name = required(self.name, "name", &location)?;
        let children = self
            .children
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, child)| child.validate(format!("{location}.children[{i}]")))
            .collect::<CatpickResult<Vec<_>>>()?;

        Ok(CategoryNode {
            value,
            name,
            children,
        })
    }
}

fn required(field: Option<String>, name: &'static str, location: &str) -> CatpickResult<String> {
    match field {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CatpickError::MissingField {
            field: name,
            location: location.to_string(),
        }),
    }
}

/// Immutable category hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTree {
    roots: Vec<CategoryNode>,
    duplicates: Vec<String>,
}

impl CategoryTree {
    /// Parse and validate a JSON payload.
    ///
    /// Nodes missing `value` or `name` reject the whole payload. Duplicate
    /// values are accepted but reported through [`CategoryTree::duplicate_values`].
    pub fn from_json(content: &str) -> CatpickResult<Self> {
        let payload: RawPayload =
            serde_json::from_str(content).map_err(|e| CatpickError::InvalidPayload {
                message: e.to_string(),
            })?;

        let raw_roots = match payload {
            RawPayload::List(nodes) => nodes,
            RawPayload::Wrapped { categories } => categories,
        };

        let roots = raw_roots
            .into_iter()
            .enumerate()
            .map(|(i, node)| node.validate(format!("$[{i}]")))
            .collect::<CatpickResult<Vec<_>>>()?;

        Ok(Self::from_roots(roots))
    }

    /// Build a tree from already constructed nodes
    pub fn from_roots(roots: Vec<CategoryNode>) -> Self {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for (node, _) in Walk::new(&roots) {
            if !seen.insert(node.value()) && !duplicates.iter().any(|d| d == node.value()) {
                tracing::warn!(value = node.value(), "duplicate category value in tree");
                duplicates.push(node.value().to_string());
            }
        }

        tracing::debug!(roots = roots.len(), nodes = seen.len(), "category tree built");
        Self { roots, duplicates }
    }

    pub fn roots(&self) -> &[CategoryNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Values that occur more than once, in first-repeat order
    pub fn duplicate_values(&self) -> &[String] {
        &self.duplicates
    }

    /// Depth-first, pre-order walk yielding each node with its depth (roots = 1)
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.roots)
    }

    /// First node (depth-first) carrying `value`
    pub fn find(&self, value: &str) -> Option<&CategoryNode> {
        self.walk().map(|(n, _)| n).find(|n| n.value() == value)
    }

    /// First node (depth-first) whose display name is `name`
    pub fn find_by_name(&self, name: &str) -> Option<&CategoryNode> {
        self.walk().map(|(n, _)| n).find(|n| n.name() == name)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    pub fn leaf_count(&self) -> usize {
        self.walk().filter(|(n, _)| n.is_leaf()).count()
    }

    /// Deepest level present (0 for an empty tree)
    pub fn depth(&self) -> usize {
        self.walk().map(|(_, d)| d).max().unwrap_or(0)
    }
}

/// Pre-order iterator over a forest of nodes
pub struct Walk<'a> {
    stack: Vec<(&'a CategoryNode, usize)>,
}

impl<'a> Walk<'a> {
    fn new(roots: &'a [CategoryNode]) -> Self {
        Self {
            stack: roots.iter().rev().map(|n| (n, 1)).collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a CategoryNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (c, depth + 1)));
        Some((node, depth))
    }
}
