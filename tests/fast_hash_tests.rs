//! Tests for the hasher selected by the `fxhash` and `ahash` feature flags.
//!
//! Whatever hasher backs `FastMap`, keyed aggregations must give the same
//! answers across repeated runs over the same sequence.

use ranger::{FastMap, range, seq};
use rstest::rstest;

#[rstest]
fn fast_map_is_default_constructible() {
    let mut map: FastMap<&str, i32> = FastMap::default();
    map.insert("key", 1);
    assert_eq!(map.get("key"), Some(&1));
}

#[rstest]
fn repeated_aggregations_agree() {
    let words = seq!["alpha", "beta", "gamma", "beta", "alpha", "beta"];

    let first = words.frequencies();
    let second = words.frequencies();

    assert_eq!(first, second);
    assert_eq!(first.get("beta"), Some(&3));
}

#[rstest]
#[case(10)]
#[case(1_000)]
fn group_by_is_complete_for_many_keys(#[case] size: u32) {
    let groups = range(0, size).group_by(|n| n % 97);
    let total: usize = groups.values().map(Vec::len).sum();

    assert_eq!(total, usize::try_from(size).unwrap_or_default());
    assert_eq!(groups.len(), usize::try_from(size.min(97)).unwrap_or_default());
}
