//! Subcommand handlers for the `catpick` binary.
//!
//! Each handler prints text, or one NDJSON `data` event in `--json` mode.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use catpick::presentation::factory;
use catpick::{CategoryTree, Config};

pub mod aggregate;
pub mod check;
pub mod group;
pub mod path;
pub mod pick;
pub mod search;
pub mod toggle;

/// Settings shared by every subcommand
pub struct CommandContext {
    pub config: Config,
    /// `--tree` flag, wins over config and environment
    pub tree: Option<PathBuf>,
    pub json: bool,
    pub unicode: bool,
}

impl CommandContext {
    pub fn load_tree(&self) -> Result<Arc<CategoryTree>> {
        factory::load_tree(self.tree.as_deref(), &self.config)
            .context("failed to load category tree")
    }

    pub fn icon(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        crate::ui::theme::icon(unicode, ascii, self.unicode)
    }
}
