use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::adapters::words_sea;
use crate::db::require_db;
use crate::error::AppError;
use crate::routes::wordle::MessageResponse;
use crate::state::app_state::AppState;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MessageResponse::text("Welcome to wordle!")))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    /// Size of the secret pool; 0 means `/wordle/start` will fail.
    #[serde(skip_serializing_if = "Option::is_none")]
    secret_words: Option<u64>,
    word_length: usize,
    max_attempts: usize,
    time: String,
}

/// Result of probing the store.
struct DbProbe {
    db: &'static str,
    db_error: Option<String>,
    migrations: String,
    secret_words: Option<u64>,
}

impl DbProbe {
    fn failed(error: String) -> Self {
        Self {
            db: "error",
            db_error: Some(error),
            migrations: "unknown".to_string(),
            secret_words: None,
        }
    }
}

async fn probe(db: &DatabaseConnection) -> DbProbe {
    let ping = Statement::from_string(
        db.get_database_backend(),
        "SELECT 1 AS health_check".to_string(),
    );
    if let Err(e) = db.query_one(ping).await {
        return DbProbe::failed(format!("DB query failed: {e}"));
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };

    DbProbe {
        db: "ok",
        db_error: None,
        migrations,
        secret_words: words_sea::count_secret_words(db).await.ok(),
    }
}

/// Liveness plus store diagnostics. Always 200; store problems are reported
/// in the body.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let probe = match require_db(&app_state) {
        Ok(db) => probe(db).await,
        Err(e) => DbProbe::failed(format!("DB unavailable: {e}")),
    };
    let rules = app_state.rules();

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: probe.db,
        db_error: probe.db_error,
        migrations: probe.migrations,
        secret_words: probe.secret_words,
        word_length: rules.word_length,
        max_attempts: rules.max_attempts,
        time: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
