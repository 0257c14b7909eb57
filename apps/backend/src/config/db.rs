use std::env;

use crate::error::AppError;

/// Which store the application connects to
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Connection URL (Postgres or SQLite file), usually from `WORDLE_DATABASE_URL`
    Url(String),
    /// Private SQLite in-memory database (tests, local experiments)
    InMemory,
}

/// Database backend family, derived from the connection URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    Sqlite,
}

/// Connection URL for SQLite in-memory stores
pub const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

impl DbProfile {
    /// Resolve the connection URL for this profile
    pub fn url(&self) -> &str {
        match self {
            DbProfile::Url(url) => url,
            DbProfile::InMemory => SQLITE_MEMORY_URL,
        }
    }

    pub fn kind(&self) -> Result<DbKind, AppError> {
        db_kind(self.url())
    }
}

/// Classify a connection URL by scheme
pub fn db_kind(url: &str) -> Result<DbKind, AppError> {
    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        Ok(DbKind::Postgres)
    } else if url.starts_with("sqlite:") {
        Ok(DbKind::Sqlite)
    } else {
        Err(AppError::config(format!(
            "Unsupported database URL scheme: '{}'",
            redact_url(url)
        )))
    }
}

/// Hide credentials in a URL before it reaches logs or error messages
pub fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
