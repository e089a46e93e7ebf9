//! Repository pattern for document storage.
//!
//! The vocabulary and the session history are each one JSON array under one
//! key. Every write replaces the whole array.

use crate::db::error::DbError;
use crate::db::schema::{SCHEMA, SCHEMA_VERSION, SESSIONS_KEY, VOCABULARY_KEY};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use vocab_core::{SessionRecord, Word};

type Result<T> = std::result::Result<T, DbError>;

/// Repository for vocabulary operations.
pub trait WordRepository {
    fn list_words(&self) -> Result<Vec<Word>>;
    fn add_word(&self, word: &Word) -> Result<()>;
    fn update_word(&self, word: &Word) -> Result<()>;
    fn remove_word(&self, id: &str) -> Result<()>;
    fn clear_words(&self) -> Result<()>;
}

/// Repository for completed practice sessions.
pub trait SessionRepository {
    fn append_session(&self, record: &SessionRecord) -> Result<()>;
    fn list_sessions(&self) -> Result<Vec<SessionRecord>>;
    fn clear_sessions(&self) -> Result<()>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        Ok(())
    }

    /// Remove the vocabulary and the session history.
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute(
            "DELETE FROM kv_store WHERE key IN (?1, ?2)",
            params![VOCABULARY_KEY, SESSIONS_KEY],
        )?;
        tracing::info!("cleared all vocabulary and session data");
        Ok(())
    }

    fn read_array<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match value {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_array<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE
             SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove_key(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

impl WordRepository for SqliteRepository {
    fn list_words(&self) -> Result<Vec<Word>> {
        self.read_array(VOCABULARY_KEY)
    }

    fn add_word(&self, word: &Word) -> Result<()> {
        let mut words = self.list_words()?;
        if words.iter().any(|w| w.id == word.id) {
            return Err(DbError::DuplicateWord(word.id.clone()));
        }
        words.push(word.clone());
        self.write_array(VOCABULARY_KEY, &words)?;
        tracing::info!(id = %word.id, french = %word.french, "word added");
        Ok(())
    }

    fn update_word(&self, word: &Word) -> Result<()> {
        let mut words = self.list_words()?;
        let slot = words
            .iter_mut()
            .find(|w| w.id == word.id)
            .ok_or_else(|| DbError::WordNotFound(word.id.clone()))?;
        *slot = word.clone();
        self.write_array(VOCABULARY_KEY, &words)?;
        tracing::info!(id = %word.id, "word updated");
        Ok(())
    }

    fn remove_word(&self, id: &str) -> Result<()> {
        let mut words = self.list_words()?;
        let before = words.len();
        words.retain(|w| w.id != id);
        if words.len() == before {
            return Err(DbError::WordNotFound(id.to_string()));
        }
        self.write_array(VOCABULARY_KEY, &words)?;
        tracing::info!(id, "word removed");
        Ok(())
    }

    fn clear_words(&self) -> Result<()> {
        self.remove_key(VOCABULARY_KEY)
    }
}

impl SessionRepository for SqliteRepository {
    fn append_session(&self, record: &SessionRecord) -> Result<()> {
        let mut sessions = self.list_sessions()?;
        sessions.push(record.clone());
        self.write_array(SESSIONS_KEY, &sessions)?;
        tracing::info!(
            id = %record.id,
            correct = record.correct,
            total = record.total,
            "session recorded"
        );
        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<SessionRecord>> {
        self.read_array(SESSIONS_KEY)
    }

    fn clear_sessions(&self) -> Result<()> {
        self.remove_key(SESSIONS_KEY)
    }
}
