use migration::{count_applied_migrations, get_latest_migration_version, migrate, MigrationCommand};
use wordle_backend::config::db::DbProfile;
use wordle_backend::infra::db::connect_db;
use wordle_backend::AppError;

#[tokio::test]
async fn fresh_store_has_no_migrations() -> Result<(), AppError> {
    let conn = connect_db(&DbProfile::InMemory).await?;
    assert_eq!(count_applied_migrations(&conn).await?, 0);
    assert_eq!(get_latest_migration_version(&conn).await?, None);
    Ok(())
}

#[tokio::test]
async fn up_is_idempotent_and_down_reverts() -> Result<(), AppError> {
    let conn = connect_db(&DbProfile::InMemory).await?;

    migrate(&conn, MigrationCommand::Up).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    assert_eq!(count_applied_migrations(&conn).await?, 1);
    let latest = get_latest_migration_version(&conn).await?.expect("applied");
    assert!(latest.ends_with("wordle_init"), "latest: {latest}");

    migrate(&conn, MigrationCommand::Down).await?;
    assert_eq!(count_applied_migrations(&conn).await?, 0);
    Ok(())
}
