//! Question set generation.

use super::distractors::generate_distractors;
use super::DEFAULT_DISTRACTOR_COUNT;
use crate::matching::normalize;
use crate::types::{Question, Word};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Build a practice question set from a vocabulary snapshot.
///
/// Takes a random selection of `min(count, words.len())` words and keeps the
/// selection order as question order. Even positions are multiple choice,
/// odd positions are typing. Multiple-choice distractors are drawn from the
/// whole vocabulary, not just the selection.
pub fn generate_questions<R>(words: &[Word], count: usize, rng: &mut R) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    if words.is_empty() {
        return Vec::new();
    }

    let mut selected: Vec<&Word> = words.iter().collect();
    selected.shuffle(rng);
    selected.truncate(count);

    let questions: Vec<Question> = selected
        .into_iter()
        .enumerate()
        .map(|(position, word)| {
            if position % 2 == 0 {
                let options = multiple_choice_options(word, words, rng);
                Question::multiple_choice(word.clone(), options)
            } else {
                Question::typing(word.clone())
            }
        })
        .collect();

    tracing::debug!(
        vocabulary = words.len(),
        questions = questions.len(),
        "generated question set"
    );
    questions
}

/// Correct answer plus distractors, shuffled.
///
/// A distractor that normalizes to an option already present is dropped so
/// that exactly one option is correct and no option repeats.
fn multiple_choice_options<R>(word: &Word, pool: &[Word], rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut seen = HashSet::from([normalize(&word.english)]);
    let mut options = vec![word.english.clone()];

    for distractor in generate_distractors(word, pool, DEFAULT_DISTRACTOR_COUNT, rng) {
        if seen.insert(normalize(&distractor)) {
            options.push(distractor);
        }
    }

    options.shuffle(rng);
    options
}
