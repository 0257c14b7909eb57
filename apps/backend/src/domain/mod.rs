//! Domain layer: pure game logic types and helpers.

pub mod compare;
pub mod outcome;
pub mod rules;
pub mod snapshot;
pub mod state;

pub use compare::{compare, is_win, Feedback};
pub use outcome::GuessOutcome;
pub use rules::GameRules;
pub use snapshot::{GameSnapshot, GuessFeedback};
pub use state::{GameState, GameStatus};

#[cfg(test)]
mod tests_props_compare;
