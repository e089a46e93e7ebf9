//! Aggregates over practice history.

use crate::types::SessionRecord;
use serde::Serialize;

/// Sessions listed under recent history.
pub const RECENT_SESSIONS: usize = 5;

/// Summary of all recorded sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStats {
    pub total_sessions: usize,
    pub last_session: Option<SessionRecord>,
    /// Newest first, at most [`RECENT_SESSIONS`].
    pub recent: Vec<SessionRecord>,
    /// Correct answers over all answered questions, 0.0 with no history.
    pub average_accuracy: f64,
    pub total_correct: usize,
    pub total_answered: usize,
}

impl SessionStats {
    pub fn from_records(records: &[SessionRecord]) -> Self {
        let mut recent = records.to_vec();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(RECENT_SESSIONS);

        let total_correct: usize = records.iter().map(|r| r.correct).sum();
        let total_answered: usize = records.iter().map(|r| r.total).sum();
        let average_accuracy = if total_answered == 0 {
            0.0
        } else {
            total_correct as f64 / total_answered as f64
        };

        Self {
            total_sessions: records.len(),
            last_session: recent.first().cloned(),
            recent,
            average_accuracy,
            total_correct,
            total_answered,
        }
    }
}
