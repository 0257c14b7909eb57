//! Game orchestration: validation, hydration, state transitions, persistence.

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::outcome::GuessOutcome;
use crate::domain::rules::GameRules;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{GameState, GameStatus};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::games::GameRecord;
use crate::repos::store::GameStore;

/// Active game ids of one owner, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveGames {
    pub owner: String,
    pub ids: Vec<String>,
}

impl ActiveGames {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Game service - generic over the `GameStore` it is handed per call.
#[derive(Debug, Clone, Copy)]
pub struct GameService {
    rules: GameRules,
}

impl GameService {
    pub fn new(rules: GameRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// Start a new game for `owner` with a random secret word.
    pub async fn start_game<S>(&self, store: &S, owner: &str) -> Result<String, AppError>
    where
        S: GameStore + ?Sized,
    {
        let secret = store
            .pick_random_secret()
            .await?
            .ok_or_else(|| AppError::internal("No secret words configured"))?;

        let game_id = Uuid::new_v4().to_string();
        store.create_game(&game_id, owner, &secret).await?;

        info!(event = "game_started", game_id = %game_id, owner, "Game started");
        Ok(game_id)
    }

    pub async fn list_active_games<S>(&self, store: &S, owner: &str) -> Result<ActiveGames, AppError>
    where
        S: GameStore + ?Sized,
    {
        let ids = store.list_active_games(owner).await?;
        Ok(ActiveGames {
            owner: owner.to_string(),
            ids,
        })
    }

    /// Feedback history of an active game owned by `owner`.
    pub async fn get_status<S>(
        &self,
        store: &S,
        owner: &str,
        game_id: &str,
    ) -> Result<GameSnapshot, AppError>
    where
        S: GameStore + ?Sized,
    {
        let record = require_active(store, owner, game_id).await?;
        let state = self.hydrate(store, &record).await?;
        Ok(state.snapshot())
    }

    /// Submit one guess.
    ///
    /// Wrong length and unknown words come back as soft outcomes and leave
    /// the game untouched. A counted guess is inserted, then the game row is
    /// updated against the lock version read at the start, so two racing
    /// guesses cannot both count.
    pub async fn submit_guess<S>(
        &self,
        store: &S,
        owner: &str,
        game_id: &str,
        word: &str,
    ) -> Result<GuessOutcome, AppError>
    where
        S: GameStore + ?Sized,
    {
        let record = require_active(store, owner, game_id).await?;

        if !self.rules.has_valid_length(word) {
            debug!(game_id, "guess rejected: wrong length");
            return Ok(GuessOutcome::InvalidLength {
                word_length: self.rules.word_length,
            });
        }

        if !store.is_valid_guess_word(word).await? {
            debug!(game_id, "guess rejected: not in dictionary");
            return Ok(GuessOutcome::InvalidWord {
                word: word.to_string(),
            });
        }

        let mut state = self.hydrate(store, &record).await?;
        let status = state.apply_guess(word)?;
        store.insert_guess(game_id, word).await?;

        info!(
            event = "guess_recorded",
            game_id,
            attempts = state.attempts(),
            max_attempts = self.rules.max_attempts,
            "Guess recorded"
        );

        let outcome = match status {
            GameStatus::Won => {
                store
                    .set_outcome(game_id, record.lock_version, true)
                    .await?;
                info!(event = "game_won", game_id, attempts = state.attempts(), "Game won");
                GuessOutcome::Correct {
                    secret_word: state.secret_word().to_string(),
                }
            }
            GameStatus::Lost => {
                store
                    .set_outcome(game_id, record.lock_version, false)
                    .await?;
                info!(event = "game_lost", game_id, "Game lost");
                GuessOutcome::Lost {
                    secret_word: state.secret_word().to_string(),
                    max_attempts: self.rules.max_attempts,
                }
            }
            GameStatus::Active => {
                store.touch_game(game_id, record.lock_version).await?;
                GuessOutcome::InProgress {
                    remaining_attempts: state.remaining_attempts(),
                    snapshot: state.snapshot(),
                }
            }
        };

        Ok(outcome)
    }

    async fn hydrate<S>(&self, store: &S, record: &GameRecord) -> Result<GameState, AppError>
    where
        S: GameStore + ?Sized,
    {
        let (secret, guesses) = store.load_secret_and_guesses(&record.id).await?;
        Ok(GameState::hydrate(secret, record.status, guesses, self.rules)?)
    }
}

async fn require_active<S>(store: &S, owner: &str, game_id: &str) -> Result<GameRecord, AppError>
where
    S: GameStore + ?Sized,
{
    store
        .find_active_game(owner, game_id)
        .await?
        .ok_or_else(|| DomainError::game_not_found().into())
}
