//! Core types for vocabulary practice.

use crate::error::{PracticeError, Result};
use chrono::{DateTime, SubsecRound, Utc};
use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Grammatical gender of a French word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    #[default]
    Unspecified,
}

impl Gender {
    /// Persisted code: `"m"`, `"f"`, or none.
    pub fn code(self) -> Option<&'static str> {
        match self {
            Self::Masculine => Some("m"),
            Self::Feminine => Some("f"),
            Self::Unspecified => None,
        }
    }

    /// Parse user input. Blank and `none` clear the gender.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "m" | "masculine" => Ok(Self::Masculine),
            "f" | "feminine" => Ok(Self::Feminine),
            "" | "none" => Ok(Self::Unspecified),
            other => Err(PracticeError::invalid_input(
                "gender",
                format!("expected m, f or none, got {other:?}"),
            )),
        }
    }
}

impl Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.code() {
            Some(code) => serializer.serialize_str(code),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            None => Ok(Self::Unspecified),
            Some("m") => Ok(Self::Masculine),
            Some("f") => Ok(Self::Feminine),
            Some(other) => Err(de::Error::invalid_value(
                Unexpected::Str(other),
                &"\"m\", \"f\" or null",
            )),
        }
    }
}

/// A French/English vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    pub french: String,
    pub english: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Word {
    /// Replace the editable fields from a draft, keeping `id` and `created_at`.
    pub fn apply_edit(&mut self, draft: WordDraft) -> Result<()> {
        let fields = draft.validate()?;
        self.french = fields.french;
        self.english = fields.english;
        self.gender = fields.gender;
        self.example = fields.example;
        Ok(())
    }
}

/// User-submitted word fields, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDraft {
    pub french: String,
    pub english: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub example: Option<String>,
}

struct ValidFields {
    french: String,
    english: String,
    gender: Gender,
    example: Option<String>,
}

impl WordDraft {
    pub fn new(french: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            french: french.into(),
            english: english.into(),
            ..Default::default()
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Validate and create a word with a fresh id, created now.
    pub fn into_word(self) -> Result<Word> {
        self.into_word_at(Utc::now())
    }

    /// Validate and create a word with a fresh id and the given creation time.
    ///
    /// The time is truncated to the millisecond precision it is stored with.
    pub fn into_word_at(self, created_at: DateTime<Utc>) -> Result<Word> {
        let fields = self.validate()?;
        let created_at = created_at.trunc_subsecs(3);
        Ok(Word {
            id: Uuid::new_v4().to_string(),
            french: fields.french,
            english: fields.english,
            gender: fields.gender,
            example: fields.example,
            created_at,
        })
    }

    fn validate(self) -> Result<ValidFields> {
        let french = self.french.trim().to_string();
        let english = self.english.trim().to_string();
        if french.is_empty() {
            return Err(PracticeError::invalid_input("french", "must not be empty"));
        }
        if english.is_empty() {
            return Err(PracticeError::invalid_input("english", "must not be empty"));
        }

        let example = self
            .example
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        Ok(ValidFields {
            french,
            english,
            gender: self.gender,
            example,
        })
    }
}

/// Presentation mode of a practice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeMode {
    MultipleChoice,
    Typing,
}

impl PracticeMode {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple Choice",
            Self::Typing => "Typing",
        }
    }
}

/// Mode-specific payload of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Correct answer plus distractors, in display order.
    MultipleChoice { options: Vec<String> },
    Typing,
}

/// One prompt of a practice session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub word: Word,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    pub fn multiple_choice(word: Word, options: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            word,
            kind: QuestionKind::MultipleChoice { options },
        }
    }

    pub fn typing(word: Word) -> Self {
        Self {
            id: Uuid::new_v4(),
            word,
            kind: QuestionKind::Typing,
        }
    }

    pub fn mode(&self) -> PracticeMode {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => PracticeMode::MultipleChoice,
            QuestionKind::Typing => PracticeMode::Typing,
        }
    }

    /// Options for multiple choice, `None` for typing questions.
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => Some(options),
            QuestionKind::Typing => None,
        }
    }

    pub fn correct_answer(&self) -> &str {
        &self.word.english
    }
}

/// The stored answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: Uuid,
    pub response: String,
    pub is_correct: bool,
}

/// Summary of one completed practice session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    #[serde(with = "crate::timestamp")]
    pub date: DateTime<Utc>,
    pub correct: usize,
    pub total: usize,
}

impl SessionRecord {
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: Utc::now().trunc_subsecs(3),
            correct,
            total,
        }
    }

    /// Fraction answered correctly, 0.0 for an empty session.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy() * 100.0).round() as u32
    }
}

impl fmt::Display for SessionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}%)",
            self.correct,
            self.total,
            self.accuracy_percent()
        )
    }
}
