//! SeaORM adapter for the secret and valid word lists.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::{secret_words, valid_words};

pub async fn count_secret_words<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    secret_words::Entity::find().count(conn).await
}

/// The secret word at `offset` in id order.
pub async fn secret_word_at<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
) -> Result<Option<String>, sea_orm::DbErr> {
    secret_words::Entity::find()
        .select_only()
        .column(secret_words::Column::Word)
        .order_by_asc(secret_words::Column::Id)
        .offset(offset)
        .limit(1)
        .into_tuple::<String>()
        .one(conn)
        .await
}

pub async fn valid_word_exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word: &str,
) -> Result<bool, sea_orm::DbErr> {
    let count = valid_words::Entity::find()
        .filter(valid_words::Column::Word.eq(word))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// Insert secret words that are not stored yet. Returns how many were added.
pub async fn insert_secret_words<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    words: &[String],
) -> Result<u64, sea_orm::DbErr> {
    let mut inserted = 0;
    for word in words {
        let exists = secret_words::Entity::find()
            .filter(secret_words::Column::Word.eq(word.as_str()))
            .count(conn)
            .await?
            > 0;
        if exists {
            continue;
        }
        secret_words::ActiveModel {
            id: NotSet,
            word: Set(word.clone()),
        }
        .insert(conn)
        .await?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Insert valid guess words that are not stored yet. Returns how many were added.
pub async fn insert_valid_words<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    words: &[String],
) -> Result<u64, sea_orm::DbErr> {
    let mut inserted = 0;
    for word in words {
        if valid_word_exists(conn, word).await? {
            continue;
        }
        valid_words::ActiveModel {
            id: NotSet,
            word: Set(word.clone()),
        }
        .insert(conn)
        .await?;
        inserted += 1;
    }
    Ok(inserted)
}
