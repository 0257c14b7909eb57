//! Game rules: word length and attempt limit.

/// Default number of letters in a word.
pub const DEFAULT_WORD_LENGTH: usize = 5;
/// Default number of counted attempts per game.
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Immutable rules every game is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl GameRules {
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
        }
    }

    /// Length is counted in chars, not bytes.
    pub fn has_valid_length(&self, word: &str) -> bool {
        word.chars().count() == self.word_length
    }

    pub fn remaining_attempts(&self, attempts: usize) -> usize {
        self.max_attempts.saturating_sub(attempts)
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}
