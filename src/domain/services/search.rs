//! Search over category names
//!
//! Case-insensitive substring match on `name`, returned in tree order with
//! the ancestor chain of each hit so pickers can show where it lives.

use serde::Serialize;

use crate::domain::entities::{CategoryNode, CategoryTree};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub value: &'a str,
    pub name: &'a str,
    /// Depth of the hit (roots = 1)
    pub depth: usize,
    /// Names from the root down to and including the hit
    pub path: Vec<&'a str>,
    pub is_leaf: bool,
}

/// All nodes whose name contains `query`. An empty query matches nothing.
pub fn search<'a>(roots: &'a [CategoryNode], query: &str) -> Vec<SearchHit<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    let mut ancestors = Vec::new();
    collect(roots, &needle, &mut ancestors, &mut hits);
    hits
}

fn collect<'a>(
    nodes: &'a [CategoryNode],
    needle: &str,
    ancestors: &mut Vec<&'a str>,
    hits: &mut Vec<SearchHit<'a>>,
) {
    for node in nodes {
        ancestors.push(node.name());
        if node.name().to_lowercase().contains(needle) {
            hits.push(SearchHit {
                value: node.value(),
                name: node.name(),
                depth: ancestors.len(),
                path: ancestors.clone(),
                is_leaf: node.is_leaf(),
            });
        }
        collect(node.children(), needle, ancestors, hits);
        ancestors.pop();
    }
}

impl CategoryTree {
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        search(self.roots(), query)
    }
}
