use anyhow::{Context, Result};
use catpick::presentation::factory::create_tree_source;
use catpick::CheckUseCase;

use super::CommandContext;
use crate::ui::json::{data_event, emit};
use crate::ui::theme::{icons, icons_ascii};

pub fn cmd_check(ctx: &CommandContext) -> Result<()> {
    let source = create_tree_source(ctx.tree.as_deref(), &ctx.config)?;
    let report = CheckUseCase::new(source)
        .run()
        .context("failed to check category tree")?;

    if ctx.json {
        let mut event = data_event("check", &report)?;
        event["clean"] = serde_json::Value::Bool(report.is_clean());
        emit(event)?;
        return Ok(());
    }

    println!(
        "{} {}",
        ctx.icon(icons::SUCCESS, icons_ascii::SUCCESS),
        report.source
    );
    println!("  roots:  {}", report.roots);
    println!("  nodes:  {}", report.nodes);
    println!("  leaves: {}", report.leaves);
    println!("  depth:  {}", report.depth);
    println!("  groups: {}", report.groups);

    for value in &report.duplicates {
        println!(
            "{} duplicate value '{}' (first occurrence wins)",
            ctx.icon(icons::WARNING, icons_ascii::WARNING),
            value
        );
    }

    Ok(())
}
