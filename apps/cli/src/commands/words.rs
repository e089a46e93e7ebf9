//! Vocabulary commands.

use super::CommandError;
use crate::db::{DbError, WordRepository};
use vocab_core::vocabulary::{newest_first, search};
use vocab_core::{Gender, Word, WordDraft};

/// Field changes for an existing word. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordEdit {
    pub french: Option<String>,
    pub english: Option<String>,
    pub gender: Option<Gender>,
    /// A blank example removes it.
    pub example: Option<String>,
}

/// Validate and store a new word.
pub fn add_word(repo: &impl WordRepository, draft: WordDraft) -> Result<Word, CommandError> {
    let word = draft.into_word()?;
    repo.add_word(&word)?;
    Ok(word)
}

/// Words newest first, optionally filtered by a search query.
pub fn list_words(
    repo: &impl WordRepository,
    query: Option<&str>,
) -> Result<Vec<Word>, CommandError> {
    let mut words = repo.list_words()?;
    newest_first(&mut words);
    Ok(search(&words, query.unwrap_or_default())
        .into_iter()
        .cloned()
        .collect())
}

/// Apply `edit` to the word with `id`.
pub fn edit_word(
    repo: &impl WordRepository,
    id: &str,
    edit: WordEdit,
) -> Result<Word, CommandError> {
    let mut word = repo
        .list_words()?
        .into_iter()
        .find(|w| w.id == id)
        .ok_or_else(|| DbError::WordNotFound(id.to_string()))?;

    let draft = WordDraft {
        french: edit.french.unwrap_or_else(|| word.french.clone()),
        english: edit.english.unwrap_or_else(|| word.english.clone()),
        gender: edit.gender.unwrap_or(word.gender),
        example: edit.example.or_else(|| word.example.clone()),
    };
    word.apply_edit(draft)?;
    repo.update_word(&word)?;
    Ok(word)
}

pub fn remove_word(repo: &impl WordRepository, id: &str) -> Result<(), CommandError> {
    repo.remove_word(id)?;
    Ok(())
}

/// One-line listing of a word.
pub fn describe(word: &Word) -> String {
    let french = match word.gender.code() {
        Some(code) => format!("{} ({code})", word.french),
        None => word.french.clone(),
    };
    let mut line = format!("{}  {french} = {}", word.id, word.english);
    if let Some(example) = &word.example {
        line.push_str(&format!("\n    {example}"));
    }
    line
}
