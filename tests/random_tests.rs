//! Tests for uniform element selection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use ranger::{Seq, SeqError, range, repeatedly, seq};
use rstest::rstest;

#[rstest]
fn rand_nth_of_singleton() {
    assert_eq!(seq![42].rand_nth(), Ok(42));
}

#[rstest]
fn rand_nth_of_empty_fails() {
    assert_eq!(
        Seq::<i32>::empty().rand_nth(),
        Err(SeqError::Empty {
            operation: "rand_nth"
        })
    );
}

#[rstest]
fn rand_nth_covers_every_element() {
    let digits = range(1, 10);
    let draws = repeatedly(move || digits.rand_nth().unwrap_or_default()).take(500);

    assert!(draws.cursor().all(|draw| (1..10).contains(&draw)));

    let counts = draws.frequencies();
    for digit in 1..10 {
        assert!(counts.get(&digit).copied().unwrap_or_default() > 0);
    }
}

#[rstest]
fn rand_nth_with_seeded_rng_is_deterministic() {
    let letters = seq!['a', 'b', 'c', 'd', 'e'];
    let mut left = StdRng::seed_from_u64(2024);
    let mut right = StdRng::seed_from_u64(2024);

    let first: Vec<char> = (0..20)
        .map(|_| letters.rand_nth_with(&mut left).unwrap_or_default())
        .collect();
    let second: Vec<char> = (0..20)
        .map(|_| letters.rand_nth_with(&mut right).unwrap_or_default())
        .collect();

    assert_eq!(first, second);
}

fn alphanumeric() -> Seq<char> {
    ranger::concat([
        range(b'a', b'z' + 1),
        range(b'A', b'Z' + 1),
        range(b'0', b'9' + 1),
    ])
    .map(char::from)
}

fn code(length: usize) -> String {
    let symbols = alphanumeric();
    repeatedly(move || symbols.rand_nth().unwrap_or('0'))
        .take(length)
        .collect()
}

#[rstest]
fn random_alphanumeric_codes() {
    assert_eq!(alphanumeric().count(), 62);

    let codes = repeatedly(|| code(8)).take(5).to_vec();
    assert_eq!(codes.len(), 5);
    for generated in &codes {
        assert_eq!(generated.chars().count(), 8);
        assert!(generated.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
