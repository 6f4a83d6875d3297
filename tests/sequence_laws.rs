//! Property-based tests for `Seq<T>` laws.
//!
//! This module verifies that sequences satisfy:
//!
//! - **Replay**: consuming a sequence twice yields the same elements
//! - **Prefix/Suffix**: `take(n) ++ drop(n)` reconstructs the sequence
//! - **Predicate split**: `take_while(p) ++ drop_while(p)` reconstructs it
//! - **Lockstep length**: `zip` and `map2` are as long as the shorter input
//! - **Fold agreement**: `reductions` ends where `reduce` does
//! - **Window shape**: `partition` windows have the requested length

use proptest::prelude::*;
use ranger::numeric::is_even;
use ranger::{Seq, concat, range, range_open};

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1_000..1_000_i32, 0..48)
}

// =============================================================================
// Replay Law
// =============================================================================

proptest! {
    /// Replay: a derived sequence produces the same elements every time
    #[test]
    fn prop_replay_is_stable(items in small_vec(), count in 0_usize..64) {
        let derived = Seq::from_vec(items).map(|n| n * 3).take(count);

        let first = derived.to_vec();
        let second = derived.to_vec();

        prop_assert_eq!(first, second);
    }
}

proptest! {
    /// Identity: wrapping then materializing gives back the input
    #[test]
    fn prop_from_vec_round_trip(items in small_vec()) {
        prop_assert_eq!(Seq::from_vec(items.clone()).to_vec(), items);
    }
}

// =============================================================================
// Prefix / Suffix Laws
// =============================================================================

proptest! {
    /// take(n) ++ drop(n) == s
    #[test]
    fn prop_take_drop_reconstructs(items in small_vec(), count in 0_usize..64) {
        let sequence = Seq::from_vec(items.clone());
        let rebuilt = concat([sequence.take(count), sequence.drop(count)]);

        prop_assert_eq!(rebuilt.to_vec(), items);
    }
}

proptest! {
    /// take_while(p) ++ drop_while(p) == s
    #[test]
    fn prop_take_while_drop_while_reconstructs(items in small_vec()) {
        let sequence = Seq::from_vec(items.clone());
        let rebuilt = sequence.take_while(is_even).chain(&sequence.drop_while(is_even));

        prop_assert_eq!(rebuilt.to_vec(), items);
    }
}

proptest! {
    /// drop_last(n) ++ take_last(n) == s
    #[test]
    fn prop_drop_last_take_last_reconstructs(items in small_vec(), count in 0_usize..64) {
        let sequence = Seq::from_vec(items.clone());
        let rebuilt = sequence.drop_last(count).chain(&sequence.take_last(count));

        prop_assert_eq!(rebuilt.to_vec(), items);
    }
}

proptest! {
    /// take_last(n) has length min(n, len)
    #[test]
    fn prop_take_last_length(items in small_vec(), count in 0_usize..64) {
        let length = items.len();
        prop_assert_eq!(Seq::from_vec(items).take_last(count).count(), count.min(length));
    }
}

proptest! {
    /// filter(p) and remove(p) partition the elements
    #[test]
    fn prop_filter_remove_counts(items in small_vec()) {
        let sequence = Seq::from_vec(items.clone());
        let kept = sequence.filter(is_even).count();
        let removed = sequence.remove(is_even).count();

        prop_assert_eq!(kept + removed, items.len());
    }
}

// =============================================================================
// Lockstep Laws
// =============================================================================

proptest! {
    /// zip is as long as its shorter input
    #[test]
    fn prop_zip_length_is_minimum(left in small_vec(), right in small_vec()) {
        let expected = left.len().min(right.len());
        let zipped = Seq::from_vec(left).zip(&Seq::from_vec(right));

        prop_assert_eq!(zipped.count(), expected);
    }
}

proptest! {
    /// map2 against an infinite partner keeps the finite length
    #[test]
    fn prop_map2_with_infinite_partner(items in small_vec()) {
        let length = items.len();
        let offset = Seq::from_vec(items).map2(&range_open(0, 1), |item, index| item + index);

        prop_assert_eq!(offset.count(), length);
    }
}

proptest! {
    /// interleave emits exactly two elements per complete pair
    #[test]
    fn prop_interleave_length(left in small_vec(), right in small_vec()) {
        let expected = 2 * left.len().min(right.len());
        let woven = Seq::from_vec(left).interleave(&Seq::from_vec(right));

        prop_assert_eq!(woven.count(), expected);
    }
}

proptest! {
    /// interpose of n elements has 2n - 1 elements
    #[test]
    fn prop_interpose_length(items in small_vec()) {
        let expected = (2 * items.len()).saturating_sub(1);
        prop_assert_eq!(Seq::from_vec(items).interpose(0).count(), expected);
    }
}

// =============================================================================
// Fold Laws
// =============================================================================

proptest! {
    /// last(reductions(f, init, s)) == reduce(f, init, s) for non-empty s
    #[test]
    fn prop_reductions_end_at_reduce(items in prop::collection::vec(-1_000..1_000_i64, 1..48)) {
        let sequence = Seq::from_vec(items);
        let combine = |total: i64, item: i64| total * 2 + item;

        prop_assert_eq!(sequence.reductions(0, combine).last(), Ok(sequence.reduce(0, combine)));
    }
}

proptest! {
    /// sum agrees with the standard library
    #[test]
    fn prop_sum_matches_iterator(items in small_vec()) {
        let expected: i32 = items.iter().sum();
        prop_assert_eq!(Seq::from_vec(items).sum(), expected);
    }
}

proptest! {
    /// min/max agree with the standard library
    #[test]
    fn prop_min_max_match_iterator(items in prop::collection::vec(any::<i32>(), 1..48)) {
        let sequence = Seq::from_vec(items.clone());

        prop_assert_eq!(sequence.min().ok(), items.iter().copied().min());
        prop_assert_eq!(sequence.max().ok(), items.iter().copied().max());
    }
}

// =============================================================================
// Window Laws
// =============================================================================

proptest! {
    /// partition(n, step) emits floor((len - n) / step) + 1 windows of length n
    #[test]
    fn prop_partition_shape(items in small_vec(), length in 1_usize..8, stride in 1_usize..8) {
        let windows = Seq::from_vec(items.clone()).partition(length, stride);
        let expected = if items.len() < length {
            0
        } else {
            (items.len() - length) / stride + 1
        };

        prop_assert_eq!(windows.count(), expected);
        prop_assert!(windows.cursor().all(|window| window.count() == length));
    }
}

proptest! {
    /// A window starting at index i holds items[i..i + n]
    #[test]
    fn prop_partition_contents(items in small_vec(), length in 1_usize..8, stride in 1_usize..8) {
        let windows = Seq::from_vec(items.clone()).partition(length, stride).to_vec();

        for (index, window) in windows.iter().enumerate() {
            let start = index * stride;
            prop_assert_eq!(window.to_vec(), items[start..start + length].to_vec());
        }
    }
}

proptest! {
    /// range(a, b) has |b - a| elements
    #[test]
    fn prop_range_length(start in -500..500_i32, stop in -500..500_i32) {
        let expected = usize::try_from((stop - start).abs()).unwrap_or_default();
        prop_assert_eq!(range(start, stop).count(), expected);
    }
}

// =============================================================================
// Grouping Laws
// =============================================================================

proptest! {
    /// group_by buckets hold every element once, in original relative order
    #[test]
    fn prop_group_by_partitions_elements(items in small_vec(), modulus in 1..6_i32) {
        let groups = Seq::from_vec(items.clone()).group_by(move |n| n.rem_euclid(modulus));

        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, items.len());
        for (key, bucket) in &groups {
            let expected: Vec<i32> = items
                .iter()
                .copied()
                .filter(|n| n.rem_euclid(modulus) == *key)
                .collect();
            prop_assert_eq!(bucket, &expected);
        }
    }
}

proptest! {
    /// index_by stores the last element seen for each key
    #[test]
    fn prop_index_by_keeps_last(items in small_vec(), modulus in 1..6_i32) {
        let index = Seq::from_vec(items.clone()).index_by(move |n| n.rem_euclid(modulus));

        for (key, value) in &index {
            let last = items.iter().rev().find(|n| n.rem_euclid(modulus) == *key);
            prop_assert_eq!(Some(value), last);
        }
    }
}

proptest! {
    /// element i of zip(a, b) is (a[i], b[i])
    #[test]
    fn prop_zip_pairs_positions(left in small_vec(), right in small_vec()) {
        let zipped = Seq::from_vec(left.clone()).zip(&Seq::from_vec(right.clone())).to_vec();

        for (index, pair) in zipped.iter().enumerate() {
            prop_assert_eq!(*pair, (left[index], right[index]));
        }
    }
}
