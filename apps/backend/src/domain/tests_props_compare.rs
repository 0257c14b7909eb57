//! Property tests for guess evaluation (pure domain, no DB).

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::domain::compare::{compare, is_win};

/// Equal-length pairs over a small alphabet so that collisions are common.
fn word_pair() -> impl Strategy<Value = (String, String)> {
    (1usize..=8).prop_flat_map(|len| {
        (
            proptest::collection::vec(proptest::char::range('a', 'e'), len),
            proptest::collection::vec(proptest::char::range('a', 'e'), len),
        )
            .prop_map(|(g, s)| (g.into_iter().collect(), s.into_iter().collect()))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: is_win holds exactly when the words are equal.
    #[test]
    fn prop_win_iff_equal((guess, secret) in word_pair()) {
        prop_assert_eq!(is_win(&guess, &secret), guess == secret);
    }

    /// Property: correct letters are the intersection of the two letter sets.
    #[test]
    fn prop_letters_are_set_intersection((guess, secret) in word_pair()) {
        let g: BTreeSet<char> = guess.chars().collect();
        let s: BTreeSet<char> = secret.chars().collect();
        let expected: BTreeSet<char> = g.intersection(&s).copied().collect();
        prop_assert_eq!(compare(&guess, &secret).correct_letters, expected);
    }

    /// Property: positions are exactly the indices with equal chars, ascending.
    #[test]
    fn prop_positions_are_index_matches((guess, secret) in word_pair()) {
        let expected: Vec<usize> = guess
            .chars()
            .zip(secret.chars())
            .enumerate()
            .filter(|(_, (g, s))| g == s)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(compare(&guess, &secret).correct_positions, expected);
    }

    /// Property: every matched position's letter is also a correct letter.
    #[test]
    fn prop_positions_imply_letters((guess, secret) in word_pair()) {
        let fb = compare(&guess, &secret);
        let chars: Vec<char> = guess.chars().collect();
        for idx in fb.correct_positions {
            prop_assert!(fb.correct_letters.contains(&chars[idx]));
        }
    }
}
