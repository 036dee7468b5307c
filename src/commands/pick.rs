use std::sync::Arc;

use anyhow::{bail, Result};
use catpick::config::ShortcutConfig;
use catpick::domain::value_objects::parse_form_value;
use catpick::presentation::factory::{create_multi_picker, create_single_picker};
use catpick::CategoryTree;

use super::CommandContext;
use crate::ui::json::{data_event, emit};
use crate::ui::terminal::detect_capabilities;
use crate::ui::widgets::tree_menu::{
    is_reserved_key, run_interactive, MenuShortcut, PickerMode, TreeMenu,
};

pub fn cmd_pick(ctx: &CommandContext, single: bool, selection: &str) -> Result<()> {
    if !detect_capabilities().interactive() {
        bail!("pick needs an interactive terminal (stdin and stdout must be a TTY)");
    }

    let tree = ctx.load_tree()?;
    let mode = if single {
        let mut picker = create_single_picker(Arc::clone(&tree), &ctx.config);
        if let Some(first) = parse_form_value(selection).first() {
            if let Err(e) = picker.pick(first) {
                tracing::warn!(error = %e, "ignoring initial selection");
            }
        }
        PickerMode::Single(picker)
    } else {
        let mut picker = create_multi_picker(Arc::clone(&tree), &ctx.config);
        picker.restore(selection);
        PickerMode::Multi(picker)
    };

    let shortcuts = if single {
        Vec::new()
    } else {
        menu_shortcuts(&tree, &ctx.config.shortcuts)
    };
    let mut menu = TreeMenu::new(tree, mode).with_shortcuts(shortcuts);

    let result = run_interactive(&mut menu, ctx.unicode)?;

    if ctx.json {
        emit(data_event(
            "pick",
            &serde_json::json!({
                "confirmed": result.is_some(),
                "form_value": result.clone().unwrap_or_default(),
            }),
        )?)?;
    } else if let Some(form_value) = result {
        println!("{}", form_value);
    }
    Ok(())
}

/// Keep the configured shortcuts that have a usable key and a matching category
fn menu_shortcuts(tree: &CategoryTree, configured: &[ShortcutConfig]) -> Vec<MenuShortcut> {
    let mut out: Vec<MenuShortcut> = Vec::new();
    for shortcut in configured {
        let Some(key) = shortcut.key else {
            continue;
        };
        if tree.find_by_name(&shortcut.label).is_none() {
            tracing::warn!(label = %shortcut.label, "shortcut has no matching category");
            continue;
        }
        if is_reserved_key(key) || out.iter().any(|s| s.key == key) {
            tracing::warn!(label = %shortcut.label, %key, "shortcut key already bound");
            continue;
        }
        out.push(MenuShortcut {
            label: shortcut.label.clone(),
            key,
        });
    }
    out
}
