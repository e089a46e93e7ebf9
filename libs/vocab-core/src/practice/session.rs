//! Practice session state machine.
//!
//! ```text
//! NotStarted --start--> InProgress(0, hidden) --submit--> InProgress(0, revealed)
//!     ^                      ^                                  |
//!     |                      +------------advance---------------+
//!     |                                                         | (last question)
//!     +------reset / abandon------ Complete <-------advance-----+
//! ```
//!
//! The score is taken from answers stored at submit time. A session that
//! is abandoned before completion yields no record.

use crate::error::{PracticeError, Result};
use crate::matching::check_answer;
use crate::types::{AnswerRecord, Question, SessionRecord};
use std::fmt;

/// Externally visible session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress { index: usize, revealed: bool },
    Complete,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::InProgress {
                index,
                revealed: false,
            } => write!(f, "awaiting an answer to question {}", index + 1),
            Self::InProgress {
                index,
                revealed: true,
            } => write!(f, "showing the answer to question {}", index + 1),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Feedback for a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
}

/// Result of moving past a revealed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Next { index: usize },
    /// The last question was passed; the record is ready to persist.
    Finished(SessionRecord),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    NotStarted,
    Awaiting,
    Revealed,
    Complete,
}

/// Walks one question set, keeping score.
#[derive(Debug, Clone, Default)]
pub struct PracticeSession {
    questions: Vec<Question>,
    answers: Vec<AnswerRecord>,
    current_index: usize,
    correct_count: usize,
    phase: Phase,
    input: String,
}

impl PracticeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session over `questions`.
    pub fn start(&mut self, questions: Vec<Question>) -> Result<()> {
        if self.phase != Phase::NotStarted {
            return Err(self.invalid("start"));
        }
        if questions.is_empty() {
            return Err(PracticeError::EmptyQuestionSet);
        }

        tracing::debug!(questions = questions.len(), "practice session started");
        self.questions = questions;
        self.answers.clear();
        self.current_index = 0;
        self.correct_count = 0;
        self.input.clear();
        self.phase = Phase::Awaiting;
        Ok(())
    }

    /// Score `response` against the current question and reveal the answer.
    pub fn submit_answer(&mut self, response: &str) -> Result<AnswerOutcome> {
        if self.phase != Phase::Awaiting {
            return Err(self.invalid("submit an answer"));
        }

        let question = &self.questions[self.current_index];
        let correct_answer = question.correct_answer().to_string();
        let is_correct = check_answer(response, &correct_answer);

        self.answers.push(AnswerRecord {
            question_id: question.id,
            response: response.to_string(),
            is_correct,
        });
        if is_correct {
            self.correct_count += 1;
        }
        self.phase = Phase::Revealed;

        tracing::debug!(index = self.current_index, is_correct, "answer submitted");
        Ok(AnswerOutcome {
            is_correct,
            correct_answer,
        })
    }

    /// Submit the option at `option` (0-based) of a multiple-choice question.
    pub fn choose_option(&mut self, option: usize) -> Result<AnswerOutcome> {
        if self.phase != Phase::Awaiting {
            return Err(self.invalid("choose an option"));
        }

        let options = self.questions[self.current_index]
            .options()
            .ok_or_else(|| {
                PracticeError::invalid_input("option", "question is not multiple choice")
            })?;
        let choice = options.get(option).cloned().ok_or_else(|| {
            PracticeError::invalid_input(
                "option",
                format!("{} is out of range 1..={}", option + 1, options.len()),
            )
        })?;

        self.submit_answer(&choice)
    }

    /// Replace the transient typed/selected input.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submit the transient input as the answer.
    pub fn submit_input(&mut self) -> Result<AnswerOutcome> {
        let input = self.input.clone();
        self.submit_answer(&input)
    }

    /// Move past a revealed answer.
    pub fn advance(&mut self) -> Result<Advance> {
        if self.phase != Phase::Revealed {
            return Err(self.invalid("advance"));
        }

        self.input.clear();
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.phase = Phase::Awaiting;
            return Ok(Advance::Next {
                index: self.current_index,
            });
        }

        self.phase = Phase::Complete;
        let correct = self.answers.iter().filter(|a| a.is_correct).count();
        debug_assert_eq!(correct, self.correct_count);
        let record = SessionRecord::new(correct, self.questions.len());
        tracing::debug!(
            correct = record.correct,
            total = record.total,
            "practice session complete"
        );
        Ok(Advance::Finished(record))
    }

    /// Discard all progress and return to `NotStarted`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Leave the session early. Nothing is recorded.
    pub fn abandon(&mut self) {
        if matches!(self.phase, Phase::Awaiting | Phase::Revealed) {
            tracing::debug!(
                answered = self.answers.len(),
                total = self.questions.len(),
                "practice session abandoned"
            );
        }
        self.reset();
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::NotStarted => SessionState::NotStarted,
            Phase::Awaiting => SessionState::InProgress {
                index: self.current_index,
                revealed: false,
            },
            Phase::Revealed => SessionState::InProgress {
                index: self.current_index,
                revealed: true,
            },
            Phase::Complete => SessionState::Complete,
        }
    }

    /// Fraction of the question set passed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        match self.phase {
            Phase::NotStarted => 0.0,
            Phase::Complete => 1.0,
            Phase::Awaiting | Phase::Revealed => {
                if self.questions.is_empty() {
                    0.0
                } else {
                    self.current_index as f64 / self.questions.len() as f64
                }
            }
        }
    }

    /// The question being asked, while in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Awaiting | Phase::Revealed => self.questions.get(self.current_index),
            Phase::NotStarted | Phase::Complete => None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    /// Answers stored so far, in question order.
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn invalid(&self, action: &'static str) -> PracticeError {
        PracticeError::InvalidTransition {
            action,
            state: self.state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::fixtures::{vocabulary, word};
    use crate::practice::generate_questions;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn typing_questions(n: usize) -> Vec<Question> {
        vocabulary(n).into_iter().map(Question::typing).collect()
    }

    fn started(n: usize) -> PracticeSession {
        let mut session = PracticeSession::new();
        session.start(typing_questions(n)).unwrap();
        session
    }

    fn answer_correctly(session: &mut PracticeSession) -> Advance {
        let answer = session.current_question().unwrap().correct_answer().to_string();
        assert!(session.submit_answer(&answer).unwrap().is_correct);
        session.advance().unwrap()
    }

    #[test]
    fn test_start_requires_questions() {
        let mut session = PracticeSession::new();
        assert_eq!(session.start(vec![]), Err(PracticeError::EmptyQuestionSet));
        assert_eq!(session.state(), SessionState::NotStarted);
    }

    #[test]
    fn test_start_enters_first_question() {
        let session = started(3);
        assert_eq!(
            session.state(),
            SessionState::InProgress {
                index: 0,
                revealed: false
            }
        );
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.correct_count(), 0);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut session = started(3);
        let err = session.start(typing_questions(2)).unwrap_err();
        assert!(matches!(err, PracticeError::InvalidTransition { action: "start", .. }));
        assert_eq!(session.questions().len(), 3);
    }

    #[test]
    fn test_half_correct_session() {
        let mut session = started(10);
        let mut finished = None;
        for i in 0..10 {
            let response = if i < 5 {
                session.current_question().unwrap().correct_answer().to_string()
            } else {
                "wrong".to_string()
            };
            let outcome = session.submit_answer(&response).unwrap();
            assert_eq!(outcome.is_correct, i < 5);
            match session.advance().unwrap() {
                Advance::Next { index } => assert_eq!(index, i + 1),
                Advance::Finished(record) => finished = Some(record),
            }
        }

        let record = finished.expect("session should finish");
        assert_eq!((record.correct, record.total), (5, 10));
        assert_eq!(record.accuracy(), 0.5);
        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(session.progress(), 1.0);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_answers_are_case_and_whitespace_insensitive() {
        let mut session = started(1);
        assert!(session.submit_answer("  WORD 0 ").unwrap().is_correct);
        assert_eq!(session.answers()[0].response, "  WORD 0 ");
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut session = started(2);
        session.submit_answer("word 0").unwrap();
        let err = session.submit_answer("word 0").unwrap_err();
        assert!(matches!(
            err,
            PracticeError::InvalidTransition {
                action: "submit an answer",
                state: SessionState::InProgress {
                    index: 0,
                    revealed: true
                }
            }
        ));
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn test_double_advance_is_rejected() {
        let mut session = started(3);
        session.submit_answer("nope").unwrap();
        session.advance().unwrap();
        let before = session.state();

        let err = session.advance().unwrap_err();
        assert_eq!(
            err,
            PracticeError::InvalidTransition {
                action: "advance",
                state: before
            }
        );
        assert_eq!(session.state(), before);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_advance_before_start_is_rejected() {
        let mut session = PracticeSession::new();
        assert!(session.advance().is_err());
        assert!(session.submit_answer("x").is_err());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_progress_tracks_index() {
        let mut session = started(4);
        answer_correctly(&mut session);
        assert_eq!(session.progress(), 0.25);
        session.submit_answer("x").unwrap();
        assert_eq!(session.progress(), 0.25);
        session.advance().unwrap();
        assert_eq!(session.progress(), 0.5);
    }

    #[test]
    fn test_abandon_yields_no_record() {
        let mut session = started(10);
        for _ in 0..3 {
            answer_correctly(&mut session);
        }
        session.abandon();
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.answers().is_empty());
        assert!(session.questions().is_empty());
        assert!(session.advance().is_err());
    }

    #[test]
    fn test_reset_allows_new_start() {
        let mut session = started(1);
        answer_correctly(&mut session);
        assert_eq!(session.state(), SessionState::Complete);
        assert!(session.start(typing_questions(2)).is_err());

        session.reset();
        session.start(typing_questions(2)).unwrap();
        assert_eq!(session.questions().len(), 2);
        assert_eq!(session.correct_count(), 0);
    }

    #[test]
    fn test_input_buffer_cleared_on_advance() {
        let mut session = started(2);
        session.set_input("Word 0");
        assert_eq!(session.input(), "Word 0");
        assert!(session.submit_input().unwrap().is_correct);
        session.advance().unwrap();
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_choose_option() {
        let target = word("a", "chat", "cat");
        let question = Question::multiple_choice(
            target,
            vec!["dog".to_string(), "cat".to_string()],
        );
        let mut session = PracticeSession::new();
        session.start(vec![question, Question::typing(word("b", "chien", "dog"))]).unwrap();

        assert!(matches!(
            session.choose_option(5),
            Err(PracticeError::InvalidInput { field: "option", .. })
        ));
        let outcome = session.choose_option(1).unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.correct_answer, "cat");

        session.advance().unwrap();
        assert!(matches!(
            session.choose_option(0),
            Err(PracticeError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_generated_session_all_correct() {
        let words = vec![
            word("a", "chat", "cat"),
            word("b", "chien", "dog"),
            word("c", "maison", "house"),
            word("d", "pomme", "apple"),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let questions = generate_questions(&words, 4, &mut rng);
        assert_eq!(questions.len(), 4);

        let mut session = PracticeSession::new();
        session.start(questions).unwrap();
        let mut record = None;
        while record.is_none() {
            if let Advance::Finished(r) = answer_correctly(&mut session) {
                record = Some(r);
            }
        }

        let record = record.unwrap();
        assert_eq!((record.correct, record.total), (4, 4));
        assert_eq!(record.accuracy(), 1.0);
    }
}
