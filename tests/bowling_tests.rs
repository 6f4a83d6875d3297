//! Bowling score kata expressed as a sequence pipeline.
//!
//! The roll sequence is walked one frame at a time with `iterate`, each
//! frame being a short window taken from the remaining rolls. Strikes and
//! spares borrow their bonus rolls from the following frame without
//! consuming them.

use ranger::{Seq, concat, iterate, repeat_n};
use rstest::rstest;

const MAX_PINS: u32 = 10;
const MAX_FRAMES: usize = 10;

fn is_strike(rolls: &Seq<u32>) -> bool {
    rolls.first_or(0) == MAX_PINS
}

fn is_spare(rolls: &Seq<u32>) -> bool {
    rolls.take(2).sum() == MAX_PINS
}

/// Returns the rolls that score in the frame at the head of `rolls`, and how
/// many of them the frame itself used.
fn single_frame(rolls: &Seq<u32>) -> (Seq<u32>, usize) {
    if is_strike(rolls) {
        (rolls.take(3), 1)
    } else if is_spare(rolls) {
        (rolls.take(3), 2)
    } else {
        (rolls.take(2), 2)
    }
}

fn all_frames(rolls: Seq<u32>) -> Seq<Seq<u32>> {
    let remaining = iterate(
        |rolls: Seq<u32>| {
            let (_, thrown) = single_frame(&rolls);
            rolls.drop(thrown)
        },
        rolls,
    );
    remaining.map(|rolls| single_frame(&rolls).0)
}

fn score(rolls: Seq<u32>) -> u32 {
    all_frames(rolls).take(MAX_FRAMES).flatten().sum()
}

fn gutter_finish(rolls: Vec<u32>) -> Seq<u32> {
    concat([Seq::from_vec(rolls), repeat_n(20, 0)])
}

#[rstest]
fn gutter_game() {
    assert_eq!(score(repeat_n(20, 0)), 0);
}

#[rstest]
fn all_ones() {
    assert_eq!(score(repeat_n(20, 1)), 20);
}

#[rstest]
fn one_spare() {
    assert_eq!(score(gutter_finish(vec![5, 5, 2, 1])), 15);
}

#[rstest]
fn one_strike() {
    assert_eq!(score(gutter_finish(vec![MAX_PINS, 3, 2, 1])), 21);
}

#[rstest]
fn perfect_game() {
    assert_eq!(score(repeat_n(12, MAX_PINS)), 300);
}

#[rstest]
fn frames_are_split_lazily() {
    let frames = all_frames(gutter_finish(vec![MAX_PINS, 7, 3, 4, 2]));
    let firsts = frames.take(3).map(|frame| frame.to_vec()).to_vec();
    assert_eq!(firsts, vec![vec![10, 7, 3], vec![7, 3, 4], vec![4, 2]]);
}
