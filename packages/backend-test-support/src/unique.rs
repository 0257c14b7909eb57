//! Unique test data, so tests sharing a store never collide.

use uuid::Uuid;

/// `{prefix}-{8 hex chars}`
pub fn unique_str(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &id[..8])
}

/// A fresh player name.
pub fn unique_owner() -> String {
    unique_str("player")
}
