use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use super::CommandContext;
use crate::ui::json::{data_event, emit};

pub fn cmd_search(ctx: &CommandContext, query: &str) -> Result<()> {
    let tree = ctx.load_tree()?;
    let hits = tree.search(query);
    tracing::debug!(query, hits = hits.len(), "search finished");

    if ctx.json {
        emit(data_event(
            "search",
            &serde_json::json!({ "query": query, "hits": hits }),
        )?)?;
        return Ok(());
    }

    let separator = &ctx.config.picker.breadcrumb_separator;
    let rows: Vec<(&str, String)> = hits
        .iter()
        .map(|hit| (hit.value, hit.path.join(separator)))
        .collect();
    print!("{}", format_rows(&rows));
    Ok(())
}

/// Value column padded to the widest value, then the breadcrumb
fn format_rows(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(v, _)| v.width()).max().unwrap_or(0);
    let mut out = String::new();
    for (value, breadcrumb) in rows {
        let pad = width - value.width();
        out.push_str(value);
        out.push_str(&" ".repeat(pad + 2));
        out.push_str(breadcrumb);
        out.push('\n');
    }
    out
}
