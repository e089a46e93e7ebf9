//! Local SQLite key-value storage.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{SessionRepository, SqliteRepository, WordRepository};
