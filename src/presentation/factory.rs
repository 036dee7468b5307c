//! Use case factory
//!
//! Wires configuration and CLI overrides to concrete infrastructure.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::{MultiPicker, SinglePicker};
use crate::config::Config;
use crate::domain::entities::CategoryTree;
use crate::domain::ports::{TreeSource, TreeSourceError};
use crate::error::CatpickResult;
use crate::infrastructure::JsonFileTreeSource;

/// Resolve the payload location: CLI flag first, then config (which already
/// carries env overrides).
pub fn resolve_tree_path(cli_tree: Option<&Path>, config: &Config) -> Option<PathBuf> {
    cli_tree
        .map(Path::to_path_buf)
        .or_else(|| config.tree.path.clone())
}

pub fn create_tree_source(
    cli_tree: Option<&Path>,
    config: &Config,
) -> Result<JsonFileTreeSource, TreeSourceError> {
    resolve_tree_path(cli_tree, config)
        .map(JsonFileTreeSource::new)
        .ok_or(TreeSourceError::NotConfigured)
}

pub fn load_tree(cli_tree: Option<&Path>, config: &Config) -> CatpickResult<Arc<CategoryTree>> {
    let source = create_tree_source(cli_tree, config)?;
    Ok(Arc::new(source.load()?))
}

pub fn create_multi_picker(tree: Arc<CategoryTree>, config: &Config) -> MultiPicker {
    MultiPicker::new(tree).with_placeholder(config.picker.placeholder.clone())
}

pub fn create_single_picker(tree: Arc<CategoryTree>, config: &Config) -> SinglePicker {
    SinglePicker::new(tree).with_separator(config.picker.breadcrumb_separator.clone())
}
