//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::BREADCRUMB_SEPARATOR;
use crate::error::CatpickResult;

use super::loader::{self, ConfigWarning};

/// Where the category payload comes from
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// JSON payload path, relative to the config file's directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Picker presentation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickerConfig {
    /// Summary text when nothing is selected
    #[serde(default)]
    pub placeholder: String,

    #[serde(default = "default_separator")]
    pub breadcrumb_separator: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            breadcrumb_separator: default_separator(),
        }
    }
}

fn default_separator() -> String {
    BREADCRUMB_SEPARATOR.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { unicode: true }
    }
}

fn default_true() -> bool {
    true
}

/// A shortcut chip offered above the tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortcutConfig {
    /// Category name the chip toggles
    pub label: String,

    /// Key bound to the chip in the interactive picker
    #[serde(default)]
    pub key: Option<char>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub shortcuts: Vec<ShortcutConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CatpickResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CatpickResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (CATPICK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
