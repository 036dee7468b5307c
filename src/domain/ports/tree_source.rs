//! TreeSource port
//!
//! Supplies the raw category payload a picker is initialised from.

use std::path::PathBuf;

use crate::domain::entities::CategoryTree;
use crate::error::CatpickResult;

pub trait TreeSource: Send + Sync {
    /// Human-readable origin, used in diagnostics
    fn describe(&self) -> String;

    /// Raw JSON payload
    fn read_payload(&self) -> Result<String, TreeSourceError>;

    /// Read and validate the payload
    fn load(&self) -> CatpickResult<CategoryTree> {
        let payload = self.read_payload()?;
        let tree = CategoryTree::from_json(&payload)?;
        tracing::info!(
            source = %self.describe(),
            nodes = tree.node_count(),
            "category tree loaded"
        );
        Ok(tree)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeSourceError {
    #[error("category file not found: {path}\n  → Fix: pass --tree <PATH> or set [tree] path in catpick.toml")]
    NotFound { path: PathBuf },

    #[error("permission denied reading category file: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("no category tree configured\n  → Fix: pass --tree <PATH>, set CATPICK_TREE, or add [tree] path to catpick.toml")]
    NotConfigured,

    #[error("failed to read category file {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },
}
