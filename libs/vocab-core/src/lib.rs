//! Core vocabulary practice library.
//!
//! Provides:
//! - Word and session data model with the persisted JSON shape
//! - Answer normalization for typed and multiple-choice answers
//! - Distractor and question set generation
//! - The practice session state machine
//! - Vocabulary search and session history statistics

pub mod error;
pub mod matching;
pub mod practice;
pub mod stats;
pub mod timestamp;
pub mod types;
pub mod vocabulary;

pub use error::{PracticeError, Result};
pub use matching::{check_answer, compare_answer, normalize, AnswerCheck};
pub use practice::{
    ensure_vocabulary, generate_distractors, generate_questions, Advance, AnswerOutcome,
    PracticeSession, SessionState, DEFAULT_DISTRACTOR_COUNT, DEFAULT_QUESTION_COUNT,
    MIN_VOCABULARY,
};
pub use stats::{SessionStats, RECENT_SESSIONS};
pub use types::{
    AnswerRecord, Gender, PracticeMode, Question, QuestionKind, SessionRecord, Word, WordDraft,
};
