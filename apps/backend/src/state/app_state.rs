use sea_orm::DatabaseConnection;

use crate::config::WordleConfig;
use crate::domain::rules::GameRules;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that never touch the store)
    db: Option<DatabaseConnection>,
    /// Game settings
    pub config: WordleConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: WordleConfig) -> Self {
        Self {
            db: Some(db),
            config,
        }
    }

    pub fn without_db(config: WordleConfig) -> Self {
        Self { db: None, config }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn rules(&self) -> GameRules {
        self.config.rules()
    }
}
