//! Results of submitting a guess.

use crate::domain::snapshot::GameSnapshot;

/// What happened to a submitted guess.
///
/// The first two variants are soft rejections: nothing was recorded and the
/// attempt does not count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    InvalidLength { word_length: usize },
    InvalidWord { word: String },
    Correct { secret_word: String },
    Lost { secret_word: String, max_attempts: usize },
    InProgress { remaining_attempts: usize, snapshot: GameSnapshot },
}

impl GuessOutcome {
    /// True when the guess was recorded against the attempt limit.
    pub fn counted(&self) -> bool {
        !matches!(
            self,
            GuessOutcome::InvalidLength { .. } | GuessOutcome::InvalidWord { .. }
        )
    }
}
