//! Property-based tests across the path helpers.
//!
//! The normalize and relationship modules carry their own small property
//! suites. This one runs many more cases and checks how the helpers compose.

use super::normalize::{normalize, resolve_against};
use super::relationship::PathRelationship;
use super::relative::relative_path;
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 0..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // relative_path followed by resolve_against lands back on the target
    #[test]
    fn relative_then_resolve_round_trips(from in absolute_path_strategy(), to in absolute_path_strategy()) {
        let rel = relative_path(&from, &to);
        prop_assert_eq!(resolve_against(&from, &rel), to);
    }

    // A path is never relative to itself by anything but the empty path
    #[test]
    fn relative_to_self_is_empty(path in absolute_path_strategy()) {
        prop_assert_eq!(relative_path(&path, &path), PathBuf::new());
    }

    // Already-normalized paths are fixed points
    #[test]
    fn normalized_paths_are_fixed_points(path in absolute_path_strategy()) {
        prop_assert_eq!(normalize(&path).unwrap(), path);
    }

    // Joining one plain segment yields a component-wise descendant
    #[test]
    fn joined_segment_is_descendant(path in absolute_path_strategy(), segment in path_component_strategy()) {
        let child = resolve_against(&path, Path::new(&segment));
        prop_assert_eq!(PathRelationship::between(&child, &path), PathRelationship::Descendant);
        prop_assert!(PathRelationship::has_prefix(&child, &path));
    }
}
