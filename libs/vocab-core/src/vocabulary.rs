//! Vocabulary browsing helpers.

use crate::types::Word;

/// Sort words by creation time, newest first.
pub fn newest_first(words: &mut [Word]) {
    words.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Words whose french or english text contains `query`, ignoring case.
///
/// A blank query matches everything.
pub fn search<'a>(words: &'a [Word], query: &str) -> Vec<&'a Word> {
    if query.trim().is_empty() {
        return words.iter().collect();
    }

    let needle = query.to_lowercase();
    words
        .iter()
        .filter(|w| {
            w.french.to_lowercase().contains(&needle) || w.english.to_lowercase().contains(&needle)
        })
        .collect()
}
