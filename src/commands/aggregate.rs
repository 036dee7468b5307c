use anyhow::Result;
use catpick::domain::value_objects::{parse_form_value, to_form_value};

use super::CommandContext;
use crate::ui::json::{data_event, emit};

/// Arguments may be plain values or `"a||b"` form values; both are flattened.
fn flatten_values(values: &[String]) -> Vec<String> {
    values.iter().flat_map(|v| parse_form_value(v)).collect()
}

pub fn cmd_aggregate(ctx: &CommandContext, values: &[String]) -> Result<()> {
    let tree = ctx.load_tree()?;
    let selected = flatten_values(values);
    let aggregated = tree.add_aggregate_selections(&selected);

    if ctx.json {
        emit(data_event(
            "aggregate",
            &serde_json::json!({
                "input": selected,
                "selection": aggregated,
                "form_value": to_form_value(&aggregated),
            }),
        )?)?;
    } else {
        println!("{}", to_form_value(&aggregated));
    }
    Ok(())
}
