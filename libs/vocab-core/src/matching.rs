//! Answer matching for practice sessions.
//!
//! Comparison ignores case and leading/trailing whitespace only. Internal
//! whitespace, accents and punctuation are significant.

use serde::{Deserialize, Serialize};

/// Result of comparing a response to the correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCheck {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized response (for display).
    pub typed_normalized: String,
    /// Normalized correct answer (for display).
    pub correct_normalized: String,
}

/// Lower-case and trim a string for tolerant comparison.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Whether `user` matches `correct` after normalization.
pub fn check_answer(user: &str, correct: &str) -> bool {
    normalize(user) == normalize(correct)
}

/// Compare a response to the correct answer, keeping the normalized forms.
pub fn compare_answer(typed: &str, correct: &str) -> AnswerCheck {
    let typed_normalized = normalize(typed);
    let correct_normalized = normalize(correct);

    AnswerCheck {
        is_correct: typed_normalized == correct_normalized,
        typed_normalized,
        correct_normalized,
    }
}
