//! Form value contracts
//!
//! The hidden field carries the selected values joined with `"||"`, selection
//! order first and inferred groups last.

use crate::common::*;

#[test]
fn contract_form_value_round_trips_through_toggle() {
    let env = TestEnv::builder().build();

    let mut form = String::new();
    for value in ["listeria", "vol", "salmonella"] {
        let result = env.run(&["toggle", "-s", &form, value, "--tree", "tree.json"]);
        assert!(result.success, "toggle {} failed: {}", value, result.stderr);
        form = result.lines()[0].to_string();
    }
    assert_eq!(form, "listeria||vol||salmonella||bact");

    let result = env.run(&["toggle", "-s", &form, "listeria", "--tree", "tree.json"]);
    assert_eq!(result.lines()[0], "vol||salmonella");
}

#[test]
fn contract_inferred_groups_are_not_duplicated() {
    let env = TestEnv::builder().build();
    let result = env.run(&[
        "aggregate",
        "bov||ruminants||ovi",
        "--tree",
        "tree.json",
    ]);

    assert_eq!(result.lines(), ["bov||ruminants||ovi"]);
}

#[test]
fn contract_empty_form_value_is_no_selection() {
    let env = TestEnv::builder().build();
    let event = env
        .run(&["toggle", "-s", "||", "vol", "--tree", "tree.json", "--json"])
        .json();

    assert_eq!(event["selection"], serde_json::json!(["vol"]));
}
