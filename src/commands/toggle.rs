use anyhow::Result;
use catpick::presentation::factory::create_multi_picker;

use super::CommandContext;
use crate::ui::json::{data_event, emit};

/// What to toggle: a category value or a shortcut label
pub enum ToggleTarget<'a> {
    Value(&'a str),
    Shortcut(&'a str),
}

pub fn cmd_toggle(
    ctx: &CommandContext,
    selection: &str,
    target: ToggleTarget<'_>,
) -> Result<()> {
    let tree = ctx.load_tree()?;
    let mut picker = create_multi_picker(tree, &ctx.config);
    picker.restore_submitted(selection);

    let selected = match target {
        ToggleTarget::Value(value) => picker.toggle(value)?,
        ToggleTarget::Shortcut(label) => picker.toggle_shortcut(label)?,
    };

    if ctx.json {
        emit(data_event(
            "toggle",
            &serde_json::json!({
                "selected": selected,
                "selection": picker.selection(),
                "form_value": picker.form_value(),
                "summary": picker.summary(),
            }),
        )?)?;
    } else {
        println!("{}", picker.form_value());
        println!("{}", picker.summary());
    }
    Ok(())
}
