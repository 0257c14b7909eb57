//! DTOs for games_sea adapter.

use crate::entities::games::GameStatus;

/// DTO for creating a new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub id: String,
    pub username: String,
    pub secret_word: String,
}

impl GameCreate {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        secret_word: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            secret_word: secret_word.into(),
        }
    }
}

/// Versioned update of an active game.
///
/// Always bumps `lock_version`; `status` is set only when present.
/// `expected_version` must match the stored version for the update to apply.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: String,
    pub status: Option<GameStatus>,
    pub expected_version: i32,
}

impl GameUpdate {
    pub fn new(id: impl Into<String>, expected_version: i32) -> Self {
        Self {
            id: id.into(),
            status: None,
            expected_version,
        }
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = Some(status);
        self
    }
}
