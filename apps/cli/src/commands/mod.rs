//! Command handlers.

pub mod practice;
pub mod stats;
pub mod words;

pub use practice::{record_session, run_practice, start_session};
pub use stats::{overview, Overview};
pub use words::{add_word, edit_word, list_words, remove_word, WordEdit};

use crate::db::DbError;
use thiserror::Error;
use vocab_core::PracticeError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Practice(#[from] PracticeError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
