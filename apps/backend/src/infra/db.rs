//! Connection setup and schema bootstrap.

use std::future::Future;
use std::time::{Duration, Instant};

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{redact_url, DbKind, DbProfile};
use crate::error::AppError;

const APP_NAME: &str = "wordle-backend";
const POSTGRES_STATEMENT_TIMEOUT_MS: u64 = 5_000;
const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

/// Retry a connection attempt with fixed interval delays.
/// Returns the result of the last attempt after all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt < max_attempts => {
                warn!(attempt, max_attempts, interval_ms, error = %e, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Add Postgres session parameters through the URL so that every pooled
/// connection gets them. Parameters already present in the URL win.
fn postgres_url_with_session_settings(url: &str) -> String {
    let mut params = Vec::new();
    if !url.contains("application_name=") {
        params.push(format!("application_name={APP_NAME}"));
    }
    if !url.contains("options=") {
        params.push(format!(
            "options=-c%20statement_timeout%3D{POSTGRES_STATEMENT_TIMEOUT_MS}"
        ));
    }
    if params.is_empty() {
        return url.to_string();
    }

    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{}", params.join("&"))
}

fn connect_options(profile: &DbProfile, kind: DbKind) -> ConnectOptions {
    let url = match kind {
        DbKind::Postgres => postgres_url_with_session_settings(profile.url()),
        DbKind::Sqlite => profile.url().to_string(),
    };

    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(Duration::from_secs(5)).sqlx_logging(false);

    match profile {
        // Every connection to `sqlite::memory:` is its own database.
        DbProfile::InMemory => {
            opt.min_connections(1).max_connections(1);
        }
        DbProfile::Url(_) if kind == DbKind::Sqlite => {
            opt.min_connections(1).max_connections(1);
        }
        DbProfile::Url(_) => {
            opt.min_connections(1).max_connections(10);
        }
    }

    opt
}

/// Open a pool for `profile`. Does NOT run migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let kind = profile.kind()?;
    let opt = connect_options(profile, kind);

    match profile {
        DbProfile::InMemory => Ok(Database::connect(opt).await?),
        DbProfile::Url(_) => {
            retry_connection(
                || {
                    let opt = opt.clone();
                    async move { Ok(Database::connect(opt).await?) }
                },
                CONNECT_ATTEMPTS,
                CONNECT_RETRY_INTERVAL_MS,
            )
            .await
        }
    }
}

/// Build the app DB *and* guarantee the schema is current.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let started = Instant::now();
    let kind = profile.kind()?;
    info!(
        db_kind = ?kind,
        url = %redact_url(profile.url()),
        "bootstrap=start"
    );

    let conn = connect_db(&profile).await?;
    migrate(&conn, MigrationCommand::Up).await?;

    info!(
        db_kind = ?kind,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "bootstrap=ready"
    );
    Ok(conn)
}
