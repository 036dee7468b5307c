//! Property tests for selection toggles and the form value codec.

use proptest::prelude::*;

use catpick::domain::value_objects::parse_form_value;
use catpick::{CategoryTree, Selection};

use crate::strategies::{all_values, three_level_tree};

fn value_list() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z0-9_.-]{1,12}", 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Toggling a value absent from the selection twice is identity.
    #[test]
    fn property_toggle_twice_is_identity(
        values in value_list(),
        extra in "[A-Z]{1,6}"
    ) {
        let original: Selection = values.iter().cloned().collect();
        let mut sel = original.clone();
        prop_assert!(sel.toggle(&extra));
        prop_assert!(!sel.toggle(&extra));
        prop_assert_eq!(sel, original);
    }

    /// PROPERTY: Toggling a present value removes its first occurrence only.
    #[test]
    fn property_toggle_present_removes_first_occurrence(
        (values, idx) in value_list()
            .prop_filter("non-empty", |v| !v.is_empty())
            .prop_flat_map(|v| {
                let len = v.len();
                (Just(v), 0..len)
            })
    ) {
        let target = values[idx].clone();
        let mut sel: Selection = values.iter().cloned().collect();

        prop_assert!(!sel.toggle(&target));

        let mut expected = values.clone();
        let first = expected.iter().position(|v| *v == target).unwrap();
        expected.remove(first);
        prop_assert_eq!(sel.values(), expected.as_slice());
    }

    /// PROPERTY: Toggling a lone present value twice moves it to the end.
    #[test]
    fn property_toggle_present_twice_moves_to_end(
        (values, idx) in proptest::collection::btree_set("[a-z0-9_.-]{1,12}", 1..8)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|v| {
                let len = v.len();
                (Just(v), 0..len)
            })
    ) {
        let target = values[idx].clone();
        let mut sel: Selection = values.iter().cloned().collect();

        prop_assert!(!sel.toggle(&target));
        prop_assert!(sel.toggle(&target));

        let mut expected: Vec<String> = values.iter().filter(|v| **v != target).cloned().collect();
        expected.push(target);
        prop_assert_eq!(sel.values(), expected.as_slice());
    }

    /// PROPERTY: Non-empty values without the delimiter survive the form field.
    #[test]
    fn property_form_value_round_trip(values in value_list()) {
        let sel: Selection = values.iter().cloned().collect();
        let parsed = parse_form_value(&sel.to_form_value());
        prop_assert_eq!(parsed, values);
    }

    /// PROPERTY: Parsing never yields empty segments and never panics.
    #[test]
    fn property_parse_form_value_drops_empty(raw in "(?s).{0,128}") {
        for segment in parse_form_value(&raw) {
            prop_assert!(!segment.is_empty());
        }
    }

    /// PROPERTY: A shortcut toggled twice leaves the selection unchanged.
    #[test]
    fn property_shortcut_round_trip(
        (roots, pick) in three_level_tree().prop_flat_map(|roots| {
            let values = all_values(&roots);
            (Just(roots), proptest::sample::select(values))
        })
    ) {
        let tree = CategoryTree::from_roots(roots);
        let label = tree.find(&pick).map(|n| n.name().to_string()).unwrap();

        let empty = Selection::new();
        let on = catpick::toggle_shortcut(&tree, &label, &empty).unwrap();
        prop_assert_eq!(on.values(), [pick.clone()]);
        let off = catpick::toggle_shortcut(&tree, &label, &on).unwrap();
        prop_assert_eq!(off, empty);
    }

    /// PROPERTY: The summary names the first value and counts the rest.
    #[test]
    fn property_summary_shape(values in value_list()) {
        let sel: Selection = values.iter().cloned().collect();
        match values.len() {
            0 => prop_assert_eq!(sel.summary(), None),
            1 => prop_assert_eq!(sel.summary(), Some(values[0].clone())),
            n => prop_assert_eq!(sel.summary(), Some(format!("{} +{}", values[0], n - 1))),
        }
    }
}
