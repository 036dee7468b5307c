//! Property tests for path resolution.

use proptest::prelude::*;

use catpick::{find_path, CategoryTree};

use crate::strategies::{all_values, three_level_tree};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The path of every value starts at a root, ends at the value,
    /// and each step is a child of the previous one.
    #[test]
    fn property_path_is_parent_chain(
        (roots, target) in three_level_tree().prop_flat_map(|roots| {
            let values = all_values(&roots);
            (Just(roots), proptest::sample::select(values))
        })
    ) {
        let path = find_path(&target, &roots).unwrap();

        prop_assert!(roots.iter().any(|r| r.value() == path[0].value()));
        prop_assert_eq!(path[path.len() - 1].value(), target.as_str());
        for pair in path.windows(2) {
            prop_assert!(pair[0].children().iter().any(|c| c.value() == pair[1].value()));
        }
    }

    /// PROPERTY: The breadcrumb has one segment per path node.
    #[test]
    fn property_breadcrumb_matches_path(
        (roots, target) in three_level_tree().prop_flat_map(|roots| {
            let values = all_values(&roots);
            (Just(roots), proptest::sample::select(values))
        })
    ) {
        let tree = CategoryTree::from_roots(roots);
        let path_len = tree.find_path(&target).map(|p| p.len()).unwrap_or(0);
        let crumb = tree.breadcrumb(&target, " > ");
        prop_assert_eq!(crumb.split(" > ").count(), path_len);
    }

    /// PROPERTY: Values outside the tree have no path.
    #[test]
    fn property_unknown_value_has_no_path(
        roots in three_level_tree(),
        target in "[A-Z]{1,8}"
    ) {
        prop_assert!(find_path(&target, &roots).is_none());
    }
}
