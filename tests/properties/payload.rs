//! Property tests for payload parsing.

use proptest::prelude::*;

use catpick::CategoryTree;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics.
    #[test]
    fn property_from_json_never_panics(s in "(?s).{0,256}") {
        let _ = CategoryTree::from_json(&s);
    }

    /// PROPERTY: Arbitrary JSON-ish node soup never panics either.
    #[test]
    fn property_from_json_nodes_never_panic(
        nodes in proptest::collection::vec(
            (proptest::option::of("[a-z ]{0,4}"), proptest::option::of("[A-Z ]{0,4}")),
            0..6
        )
    ) {
        let items: Vec<serde_json::Value> = nodes
            .into_iter()
            .map(|(value, name)| serde_json::json!({ "value": value, "name": name }))
            .collect();
        let payload = serde_json::Value::Array(items).to_string();

        if let Ok(tree) = CategoryTree::from_json(&payload) {
            for node in tree.roots() {
                prop_assert!(!node.value().trim().is_empty());
                prop_assert!(!node.name().trim().is_empty());
            }
        }
    }
}
