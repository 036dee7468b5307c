//! Configuration module for Catpick
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CATPICK_*)
//! 3. Project config (./catpick.toml)
//! 4. User config (~/.config/catpick/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, PickerConfig, ShortcutConfig, TreeConfig};
