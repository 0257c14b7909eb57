//! Public view of an active game: guesses so far and their feedback.
//!
//! The snapshot never contains the secret word.

use serde::{Deserialize, Serialize};

use crate::domain::compare::{compare, Feedback};

/// Feedback for one recorded guess, in wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessFeedback {
    pub guess: String,
    pub correct_letters: Vec<char>,
    pub correct_indices: Vec<usize>,
}

impl GuessFeedback {
    pub fn evaluate(guess: &str, secret: &str) -> Self {
        let Feedback {
            correct_letters,
            correct_positions,
        } = compare(guess, secret);

        Self {
            guess: guess.to_string(),
            correct_letters: correct_letters.into_iter().collect(),
            correct_indices: correct_positions,
        }
    }
}

/// Status payload for an active game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub num_guesses: usize,
    pub max_attempts: usize,
    pub guesses: Vec<GuessFeedback>,
}

/// Build the snapshot for `guesses` (submission order) against `secret`.
pub fn snapshot<S: AsRef<str>>(guesses: &[S], secret: &str, max_attempts: usize) -> GameSnapshot {
    GameSnapshot {
        num_guesses: guesses.len(),
        max_attempts,
        guesses: guesses
            .iter()
            .map(|g| GuessFeedback::evaluate(g.as_ref(), secret))
            .collect(),
    }
}
