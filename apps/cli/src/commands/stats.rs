//! Statistics commands.

use super::CommandError;
use crate::db::{SessionRepository, WordRepository};
use serde::Serialize;
use vocab_core::{SessionStats, MIN_VOCABULARY};

/// Home screen summary.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub word_count: usize,
    pub can_practice: bool,
    pub sessions: SessionStats,
}

pub fn overview<R>(repo: &R) -> Result<Overview, CommandError>
where
    R: WordRepository + SessionRepository,
{
    let word_count = repo.list_words()?.len();
    let sessions = SessionStats::from_records(&repo.list_sessions()?);

    Ok(Overview {
        word_count,
        can_practice: word_count >= MIN_VOCABULARY,
        sessions,
    })
}
