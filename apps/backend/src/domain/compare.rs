//! Guess evaluation against the secret word.
//!
//! Letters are a set: a letter counts once no matter how often it appears in
//! either word, and the secret's letter frequencies are not consumed. This is
//! deliberately not the duplicate-letter handling of classic Wordle.

use std::collections::BTreeSet;

/// Feedback for a single guess.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    /// Letters of the guess that appear anywhere in the secret.
    pub correct_letters: BTreeSet<char>,
    /// Indices where the guess and the secret hold the same letter, ascending.
    pub correct_positions: Vec<usize>,
}

/// Compare `guess` against `secret`.
///
/// Both words are expected to have the same length in chars; callers reject
/// wrong-length guesses before getting here.
pub fn compare(guess: &str, secret: &str) -> Feedback {
    let guess: Vec<char> = guess.chars().collect();
    let mut feedback = Feedback::default();

    for (sw_idx, sw_char) in secret.chars().enumerate() {
        for (g_idx, &g_char) in guess.iter().enumerate() {
            if g_char != sw_char {
                continue;
            }
            if sw_idx == g_idx {
                feedback.correct_positions.push(g_idx);
            }
            feedback.correct_letters.insert(g_char);
        }
    }

    feedback
}

/// True when every position of the secret is matched.
pub fn is_win(guess: &str, secret: &str) -> bool {
    compare(guess, secret).correct_positions.len() == secret.chars().count()
}
