use anyhow::Result;

use super::CommandContext;
use crate::ui::json::{data_event, emit};

pub fn cmd_group(ctx: &CommandContext, value: &str) -> Result<()> {
    let tree = ctx.load_tree()?;
    let group = tree.is_intermediate_node_with_children(value);

    if ctx.json {
        emit(data_event(
            "group",
            &serde_json::json!({ "value": value, "group": group }),
        )?)?;
    } else {
        println!("{}", group);
    }
    Ok(())
}
