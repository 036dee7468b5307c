//! Property tests for level aggregation.

use proptest::prelude::*;

use catpick::add_aggregate_selections;

use crate::strategies::{all_values, three_level_tree};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The input selection is a prefix of the output.
    #[test]
    fn property_aggregate_preserves_input_prefix(
        (roots, picks) in three_level_tree().prop_flat_map(|roots| {
            let values = all_values(&roots);
            let picks = proptest::sample::subsequence(values.clone(), 0..=values.len());
            (Just(roots), picks)
        })
    ) {
        let out = add_aggregate_selections(&roots, &picks);
        prop_assert!(out.len() >= picks.len());
        prop_assert_eq!(&out[..picks.len()], &picks[..]);
    }

    /// PROPERTY: Appended values are distinct and absent from the input.
    #[test]
    fn property_aggregate_appends_each_group_once(
        (roots, picks) in three_level_tree().prop_flat_map(|roots| {
            let values = all_values(&roots);
            let picks = proptest::sample::subsequence(values.clone(), 0..=values.len());
            (Just(roots), picks)
        })
    ) {
        let out = add_aggregate_selections(&roots, &picks);
        let appended = &out[picks.len()..];
        for (i, v) in appended.iter().enumerate() {
            prop_assert!(!picks.contains(v));
            prop_assert!(!appended[i + 1..].contains(v));
        }
    }

    /// PROPERTY: A group is appended iff it has leaves and all are selected.
    #[test]
    fn property_aggregate_matches_full_coverage(
        (roots, picks) in three_level_tree().prop_flat_map(|roots| {
            let values = all_values(&roots);
            let picks = proptest::sample::subsequence(values.clone(), 0..=values.len());
            (Just(roots), picks)
        })
    ) {
        let out = add_aggregate_selections(&roots, &picks);
        for root in &roots {
            for group in root.children() {
                let covered = !group.children().is_empty()
                    && group.children().iter().all(|c| picks.iter().any(|p| p == c.value()));
                let present = out.iter().any(|v| v == group.value());
                let already = picks.iter().any(|p| p == group.value());
                prop_assert_eq!(present, covered || already);
            }
        }
    }

    /// PROPERTY: Aggregation is idempotent.
    #[test]
    fn property_aggregate_is_idempotent(
        (roots, picks) in three_level_tree().prop_flat_map(|roots| {
            let values = all_values(&roots);
            let picks = proptest::sample::subsequence(values.clone(), 0..=values.len());
            (Just(roots), picks)
        })
    ) {
        let once = add_aggregate_selections(&roots, &picks);
        let twice = add_aggregate_selections(&roots, &once);
        prop_assert_eq!(once, twice);
    }
}
