//! SeaORM adapter for guesses.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::guesses;

/// Insert one guess. The `(game_id, word)` unique index rejects duplicates.
pub async fn create_guess<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    word: &str,
) -> Result<guesses::Model, sea_orm::DbErr> {
    let guess = guesses::ActiveModel {
        id: NotSet,
        game_id: Set(game_id.to_string()),
        word: Set(word.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    guess.insert(conn).await
}

/// Guessed words of a game in submission order.
pub async fn list_words_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<String>, sea_orm::DbErr> {
    guesses::Entity::find()
        .select_only()
        .column(guesses::Column::Word)
        .filter(guesses::Column::GameId.eq(game_id))
        .order_by_asc(guesses::Column::Id)
        .into_tuple::<String>()
        .all(conn)
        .await
}
