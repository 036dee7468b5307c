//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatpickError, CatpickResult};

use super::types::Config;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "catpick.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// A relative `[tree] path` is resolved against the config file's directory.
pub fn load_with_warnings(path: &Path) -> CatpickResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CatpickError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let (Some(tree_path), Some(dir)) = (config.tree.path.as_ref(), path.parent()) {
        if tree_path.is_relative() {
            config.tree.path = Some(dir.join(tree_path));
        }
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let get_env = |key: &str| std::env::var(key).ok();

    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if let Some(config) = load_logged(&project_config) {
            return with_env_overrides(config, get_env);
        }
    }

    if let Some(user_config_dir) = dirs_config_dir() {
        let user_config = user_config_dir.join("catpick/config.toml");
        if let Some(config) = load_logged(&user_config) {
            return with_env_overrides(config, get_env);
        }
    }

    with_env_overrides(Config::default(), get_env)
}

fn load_logged(path: &Path) -> Option<Config> {
    if !path.exists() {
        return None;
    }
    match load_with_warnings(path) {
        Ok((config, warnings)) => {
            for w in &warnings {
                tracing::warn!(
                    key = %w.key,
                    file = %w.file.display(),
                    suggestion = w.suggestion.as_deref().unwrap_or(""),
                    "unknown config key"
                );
            }
            tracing::debug!(file = %path.display(), "config loaded");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "ignoring unreadable config");
            None
        }
    }
}

/// Apply environment variable overrides (CATPICK_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(path) = get_env("CATPICK_TREE").filter(|p| !p.is_empty()) {
        config.tree.path = Some(PathBuf::from(path));
    }

    if let Some(placeholder) = get_env("CATPICK_PLACEHOLDER") {
        config.picker.placeholder = placeholder;
    }

    if let Some(separator) = get_env("CATPICK_SEPARATOR").filter(|s| !s.is_empty()) {
        config.picker.breadcrumb_separator = separator;
    }

    if let Some(val) = get_env("CATPICK_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tree",
        "path",
        "picker",
        "placeholder",
        "breadcrumb_separator",
        "output",
        "unicode",
        "shortcuts",
        "label",
        "key",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b.len()]
}
