//! Wrong-answer options for multiple-choice questions.

use crate::types::Word;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick up to `count` wrong answers for `target` from `pool`.
///
/// The target is excluded by id. Remaining words are shuffled and the first
/// `count` english translations are returned, so duplicate translations in
/// the pool can appear twice. A small pool yields fewer items.
pub fn generate_distractors<R>(
    target: &Word,
    pool: &[Word],
    count: usize,
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut candidates: Vec<&Word> = pool.iter().filter(|w| w.id != target.id).collect();
    candidates.shuffle(rng);

    candidates
        .into_iter()
        .take(count)
        .map(|w| w.english.clone())
        .collect()
}
