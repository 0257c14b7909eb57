//! SeaORM adapter for games - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::games::{self, GameStatus};
use crate::infra::db_errors::OPTIMISTIC_LOCK_PREFIX;

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

/// Apply a versioned update to an ACTIVE game, then refetch it.
///
/// Filters on id, expected lock_version and ACTIVE status, bumps lock_version
/// and updated_at. Zero affected rows means the game vanished
/// (`RecordNotFound`) or someone else moved it first (optimistic lock payload).
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: &str,
    expected_version: i32,
    configure_update: F,
) -> Result<games::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<games::Entity>) -> sea_orm::UpdateMany<games::Entity>,
{
    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(games::Entity::update_many())
        .col_expr(games::Column::UpdatedAt, Expr::value(now))
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::LockVersion.eq(expected_version))
        .filter(games::Column::Status.eq(GameStatus::Active))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        let game = games::Entity::find_by_id(id.to_string()).one(conn).await?;
        return match game {
            Some(game) => Err(sea_orm::DbErr::Custom(format!(
                "{OPTIMISTIC_LOCK_PREFIX}{{\"expected\":{},\"actual\":{}}}",
                expected_version, game.lock_version
            ))),
            None => Err(sea_orm::DbErr::RecordNotFound("Game not found".to_string())),
        };
    }

    games::Entity::find_by_id(id.to_string())
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id.to_string()).one(conn).await
}

/// Ownership + active predicate in one query.
pub async fn find_active_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    game_id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Id.eq(game_id))
        .filter(games::Column::Username.eq(username))
        .filter(games::Column::Status.eq(GameStatus::Active))
        .one(conn)
        .await
}

/// Active games of one owner, oldest first.
pub async fn list_active_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Username.eq(username))
        .filter(games::Column::Status.eq(GameStatus::Active))
        .order_by_asc(games::Column::CreatedAt)
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: Set(dto.id),
        username: Set(dto.username),
        secret_word: Set(dto.secret_word),
        status: Set(GameStatus::Active),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    let GameUpdate {
        id,
        status,
        expected_version,
    } = dto;

    optimistic_update_then_fetch(conn, &id, expected_version, |update| match status {
        Some(status) => update.col_expr(games::Column::Status, Expr::value(status)),
        None => update,
    })
    .await
}
