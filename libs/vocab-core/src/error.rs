//! Error types for vocab-core.

use crate::practice::SessionState;
use thiserror::Error;

/// Result type alias using PracticeError.
pub type Result<T> = std::result::Result<T, PracticeError>;

/// Errors raised by the practice engine and word validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PracticeError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("at least {required} words are needed to practice, found {available}")]
    InsufficientVocabulary { available: usize, required: usize },

    #[error("cannot start a session without questions")]
    EmptyQuestionSet,

    #[error("cannot {action} while session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: SessionState,
    },
}

impl PracticeError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
