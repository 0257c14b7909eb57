//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::adapters::games_sea as games_adapter;
use crate::domain::state::GameStatus;
use crate::entities::games;
use crate::entities::games::GameStatus as DbGameStatus;
use crate::errors::domain::DomainError;

/// Game as the service layer sees it. The secret word is deliberately absent;
/// it is loaded separately, only when a guess has to be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub id: String,
    pub owner: String,
    pub status: GameStatus,
    pub lock_version: i32,
    pub created_at: time::OffsetDateTime,
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    owner: &str,
    secret_word: &str,
) -> Result<GameRecord, DomainError> {
    let game =
        games_adapter::create_game(conn, games_adapter::GameCreate::new(id, owner, secret_word))
            .await?;
    Ok(GameRecord::from(game))
}

pub async fn find_active_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner: &str,
    game_id: &str,
) -> Result<Option<GameRecord>, DomainError> {
    let game = games_adapter::find_active_for_owner(conn, owner, game_id).await?;
    Ok(game.map(GameRecord::from))
}

pub async fn list_active_game_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner: &str,
) -> Result<Vec<String>, DomainError> {
    let games = games_adapter::list_active_for_owner(conn, owner).await?;
    Ok(games.into_iter().map(|g| g.id).collect())
}

/// Secret word of a game, or `NotFound` if the game does not exist.
pub async fn require_secret_word<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<String, DomainError> {
    games_adapter::find_by_id(conn, game_id)
        .await?
        .map(|g| g.secret_word)
        .ok_or_else(DomainError::game_not_found)
}

/// Move an active game to WON or LOST under optimistic locking.
pub async fn set_outcome<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    expected_lock_version: i32,
    won: bool,
) -> Result<GameRecord, DomainError> {
    let status = if won {
        DbGameStatus::Won
    } else {
        DbGameStatus::Lost
    };
    let dto = games_adapter::GameUpdate::new(game_id, expected_lock_version).with_status(status);
    let game = games_adapter::update_game(conn, dto).await?;
    debug!(game_id, lock_version = game.lock_version, ?status, "game outcome stored");
    Ok(GameRecord::from(game))
}

/// Bump lock_version of an active game without changing its status.
///
/// Used when a guess leaves the game in progress, so that a concurrent guess
/// hydrated from the same version fails instead of double counting.
pub async fn touch_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    expected_lock_version: i32,
) -> Result<GameRecord, DomainError> {
    let dto = games_adapter::GameUpdate::new(game_id, expected_lock_version);
    let game = games_adapter::update_game(conn, dto).await?;
    Ok(GameRecord::from(game))
}

// Conversions between SeaORM models and domain models

impl From<DbGameStatus> for GameStatus {
    fn from(status: DbGameStatus) -> Self {
        match status {
            DbGameStatus::Active => GameStatus::Active,
            DbGameStatus::Won => GameStatus::Won,
            DbGameStatus::Lost => GameStatus::Lost,
        }
    }
}

impl From<GameStatus> for DbGameStatus {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Active => DbGameStatus::Active,
            GameStatus::Won => DbGameStatus::Won,
            GameStatus::Lost => DbGameStatus::Lost,
        }
    }
}

impl From<games::Model> for GameRecord {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            owner: model.username,
            status: model.status.into(),
            lock_version: model.lock_version,
            created_at: model.created_at,
        }
    }
}
