//! Practice session engine.
//!
//! Question sets are built from a vocabulary snapshot and walked by
//! [`PracticeSession`]. All randomness comes from the caller's [`rand::Rng`]
//! so sessions are reproducible under a seeded generator.

pub mod distractors;
pub mod questions;
pub mod session;

pub use distractors::generate_distractors;
pub use questions::generate_questions;
pub use session::{Advance, AnswerOutcome, PracticeSession, SessionState};

use crate::error::{PracticeError, Result};

/// Smallest vocabulary that can start a session.
pub const MIN_VOCABULARY: usize = 4;

/// Questions per session unless configured otherwise.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Wrong options offered with each multiple-choice question.
pub const DEFAULT_DISTRACTOR_COUNT: usize = 3;

/// Check that enough words exist to start a session.
pub fn ensure_vocabulary(available: usize) -> Result<()> {
    if available < MIN_VOCABULARY {
        return Err(PracticeError::InsufficientVocabulary {
            available,
            required: MIN_VOCABULARY,
        });
    }
    Ok(())
}
