//! Property-based tests for mask reduction.

use super::{reduce, ReduceDegree};
use crate::path::segments::{depth, is_covered_by};
use proptest::prelude::*;

// Small alphabet so that generated masks share prefixes and collide often.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-c]{1,3}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|parts| parts.join("."))
}

// Paths with arbitrary bytes, including empty segments and stray delimiters.
fn raw_path_strategy() -> impl Strategy<Value = String> {
    "[a-b.]{0,10}"
}

fn mask_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path_strategy(), 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Every output path has depth <= degree
    #[test]
    fn reduced_paths_respect_depth(mask in mask_strategy(), degree in 0usize..6) {
        let reduced = reduce(&mask, ReduceDegree::new(degree));
        for path in reduced.paths() {
            prop_assert!(depth(path) <= degree, "{} deeper than {}", path, degree);
        }
    }

    // Output is strictly increasing: sorted with no duplicates
    #[test]
    fn reduced_paths_sorted_and_unique(mask in mask_strategy(), degree in 0usize..6) {
        let reduced = reduce(&mask, ReduceDegree::new(degree));
        for pair in reduced.paths().windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    // Reducing twice at the same degree changes nothing
    #[test]
    fn reduction_is_idempotent(mask in mask_strategy(), degree in 0usize..6) {
        let degree = ReduceDegree::new(degree);
        let once = reduce(&mask, degree);
        let twice = reduce(&once, degree);
        prop_assert_eq!(once, twice);
    }

    // Every output is an input or a segment-boundary prefix of one
    #[test]
    fn reduction_never_invents_paths(mask in prop::collection::vec(raw_path_strategy(), 0..20), degree in 1usize..6) {
        let reduced = reduce(&mask, ReduceDegree::new(degree));
        for path in reduced.paths() {
            let origin = mask.iter().any(|input| input == path || is_covered_by(input, path));
            prop_assert!(origin, "{} has no origin in {:?}", path, mask);
        }
    }

    // Every input is represented by some output
    #[test]
    fn reduction_covers_every_input(mask in mask_strategy(), degree in 1usize..6) {
        let reduced = reduce(&mask, ReduceDegree::new(degree));
        for input in &mask {
            let kept = reduced.paths().iter().any(|path| path == input || is_covered_by(input, path));
            prop_assert!(kept, "{} lost", input);
        }
    }

    // The caller's mask is left untouched
    #[test]
    fn reduction_does_not_mutate_source(mask in mask_strategy(), degree in 0usize..6) {
        let snapshot = mask.clone();
        let _ = reduce(&mask, ReduceDegree::new(degree));
        prop_assert_eq!(mask, snapshot);
    }

    // A deeper degree never yields fewer paths
    #[test]
    fn deeper_degree_keeps_at_least_as_many(mask in mask_strategy(), degree in 1usize..5) {
        let shallow = reduce(&mask, ReduceDegree::new(degree));
        let deep = reduce(&mask, ReduceDegree::new(degree + 1));
        prop_assert!(shallow.len() <= deep.len());
    }
}
