use anyhow::Result;

use super::CommandContext;
use crate::ui::json::{data_event, emit};

pub fn cmd_path(ctx: &CommandContext, value: &str) -> Result<()> {
    let tree = ctx.load_tree()?;
    let separator = &ctx.config.picker.breadcrumb_separator;

    if ctx.json {
        let names: Vec<&str> = tree
            .find_path(value)
            .map(|path| path.iter().map(|n| n.name()).collect())
            .unwrap_or_default();
        emit(data_event(
            "path",
            &serde_json::json!({
                "value": value,
                "found": !names.is_empty(),
                "names": names,
                "breadcrumb": tree.breadcrumb(value, separator),
            }),
        )?)?;
        return Ok(());
    }

    // Unknown values print an empty breadcrumb
    let breadcrumb = tree.breadcrumb(value, separator);
    if breadcrumb.is_empty() {
        tracing::debug!(value, "value not found in tree");
    } else {
        println!("{}", breadcrumb);
    }
    Ok(())
}
