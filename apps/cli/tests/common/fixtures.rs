//! Test fixtures and factory functions for creating test data.

use vocab_core::{Gender, Word, WordDraft};
use vocab_flashcards::db::WordRepository;

/// French/English pairs with distinct translations.
pub const PAIRS: &[(&str, &str, Gender)] = &[
    ("chat", "cat", Gender::Masculine),
    ("chien", "dog", Gender::Masculine),
    ("maison", "house", Gender::Feminine),
    ("pomme", "apple", Gender::Feminine),
    ("livre", "book", Gender::Masculine),
    ("voiture", "car", Gender::Feminine),
    ("arbre", "tree", Gender::Masculine),
    ("fleur", "flower", Gender::Feminine),
    ("soleil", "sun", Gender::Masculine),
    ("lune", "moon", Gender::Feminine),
    ("eau", "water", Gender::Feminine),
    ("pain", "bread", Gender::Masculine),
];

/// Store the first `n` fixture pairs.
pub fn seed_words(repo: &impl WordRepository, n: usize) -> Vec<Word> {
    PAIRS
        .iter()
        .take(n)
        .map(|(french, english, gender)| {
            let word = WordDraft::new(*french, *english)
                .with_gender(*gender)
                .into_word()
                .expect("valid fixture word");
            repo.add_word(&word).expect("store fixture word");
            word
        })
        .collect()
}

/// Store `n` words that all translate to `english`.
pub fn seed_same_translation(repo: &impl WordRepository, n: usize, english: &str) {
    for i in 0..n {
        let word = WordDraft::new(format!("mot {i}"), english)
            .into_word()
            .expect("valid fixture word");
        repo.add_word(&word).expect("store fixture word");
    }
}

/// Store `n` words translating to "1", "2", ... so option labels and texts collide.
pub fn seed_numeric_translations(repo: &impl WordRepository, n: usize) {
    for i in 1..=n {
        let word = WordDraft::new(format!("nombre {i}"), i.to_string())
            .into_word()
            .expect("valid fixture word");
        repo.add_word(&word).expect("store fixture word");
    }
}
