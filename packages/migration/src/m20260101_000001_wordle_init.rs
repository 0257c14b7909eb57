use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    Username,
    SecretWord,
    Status,
    LockVersion,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Guesses {
    Table,
    Id,
    GameId,
    Word,
    CreatedAt,
}

#[derive(Iden)]
enum SecretWords {
    Table,
    Id,
    Word,
}

#[derive(Iden)]
enum ValidWords {
    Table,
    Id,
    Word,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Username).string().not_null())
                    .col(ColumnDef::new(Games::SecretWord).string().not_null())
                    .col(
                        ColumnDef::new(Games::Status)
                            .string_len(16)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(
                        ColumnDef::new(Games::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // active-game lookups are always by owner + status
        manager
            .create_index(
                Index::create()
                    .name("idx_games_username_status")
                    .table(Games::Table)
                    .col(Games::Username)
                    .col(Games::Status)
                    .to_owned(),
            )
            .await?;

        // guesses
        manager
            .create_table(
                Table::create()
                    .table(Guesses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Guesses::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Guesses::GameId).string_len(36).not_null())
                    .col(ColumnDef::new(Guesses::Word).string().not_null())
                    .col(
                        ColumnDef::new(Guesses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guesses_game_id")
                            .from(Guesses::Table, Guesses::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // a word may be guessed at most once per game
        manager
            .create_index(
                Index::create()
                    .name("ux_guesses_game_word")
                    .table(Guesses::Table)
                    .col(Guesses::GameId)
                    .col(Guesses::Word)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // secret_words
        manager
            .create_table(
                Table::create()
                    .table(SecretWords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SecretWords::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(SecretWords::Word).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_secret_words_word")
                    .table(SecretWords::Table)
                    .col(SecretWords::Word)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // valid_words
        manager
            .create_table(
                Table::create()
                    .table(ValidWords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ValidWords::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(ValidWords::Word).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_valid_words_word")
                    .table(ValidWords::Table)
                    .col(ValidWords::Word)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guesses::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ValidWords::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SecretWords::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
