//! SQLite schema definitions.

/// Current schema version, stored in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

/// Every document is one JSON value stored under one key.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Key holding the vocabulary JSON array.
pub const VOCABULARY_KEY: &str = "vocabulary";

/// Key holding the session history JSON array.
pub const SESSIONS_KEY: &str = "sessions";
