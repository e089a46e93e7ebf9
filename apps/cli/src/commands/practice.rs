//! Practice session commands.

use super::CommandError;
use crate::db::{SessionRepository, WordRepository};
use rand::Rng;
use std::io::{BufRead, Write};
use vocab_core::{
    check_answer, ensure_vocabulary, generate_questions, Advance, AnswerOutcome, PracticeSession,
    Question, SessionRecord,
};

/// Input that leaves a session without recording it.
pub const QUIT: &str = ":q";

/// Load the vocabulary and start a session over a fresh question set.
pub fn start_session<R>(
    repo: &impl WordRepository,
    count: usize,
    rng: &mut R,
) -> Result<PracticeSession, CommandError>
where
    R: Rng + ?Sized,
{
    let words = repo.list_words()?;
    if let Err(e) = ensure_vocabulary(words.len()) {
        tracing::warn!(available = words.len(), "refusing to start practice");
        return Err(e.into());
    }

    let questions = generate_questions(&words, count, rng);
    let mut session = PracticeSession::new();
    session.start(questions)?;
    Ok(session)
}

/// Persist a finished session.
pub fn record_session(
    repo: &impl SessionRepository,
    record: &SessionRecord,
) -> Result<(), CommandError> {
    repo.append_session(record)?;
    tracing::info!(
        correct = record.correct,
        total = record.total,
        "practice session completed"
    );
    Ok(())
}

/// Run an interactive session over `input`/`output`.
///
/// Returns the stored record, or `None` when the user quit or the input
/// ended before the last question.
pub fn run_practice<Repo, R, In, Out>(
    repo: &Repo,
    count: usize,
    rng: &mut R,
    input: In,
    output: &mut Out,
) -> Result<Option<SessionRecord>, CommandError>
where
    Repo: WordRepository + SessionRepository,
    R: Rng + ?Sized,
    In: BufRead,
    Out: Write,
{
    let mut session = start_session(repo, count, rng)?;
    let total = session.questions().len();
    writeln!(
        output,
        "Practice: {total} questions. Answer with an option number or the translation. \
         Enter {QUIT} to stop."
    )?;

    let mut lines = input.lines();
    while let Some(question) = session.current_question().cloned() {
        print_question(output, &question, session.current_index(), total)?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                session.abandon();
                writeln!(output)?;
                return Ok(None);
            }
        };
        if line.trim() == QUIT {
            session.abandon();
            writeln!(output, "Session abandoned.")?;
            return Ok(None);
        }

        let outcome = submit(&mut session, &question, line)?;
        if outcome.is_correct {
            writeln!(output, "Correct!")?;
        } else {
            writeln!(output, "Incorrect. Answer: {}", outcome.correct_answer)?;
        }
        if let Some(example) = &question.word.example {
            writeln!(output, "  {example}")?;
        }

        if let Advance::Finished(record) = session.advance()? {
            record_session(repo, &record)?;
            writeln!(output, "Session complete: {record}")?;
            return Ok(Some(record));
        }
    }

    Ok(None)
}

/// A number picks a multiple-choice option unless it is itself the text of
/// an option; anything else is the answer text.
fn submit(
    session: &mut PracticeSession,
    question: &Question,
    line: String,
) -> Result<AnswerOutcome, CommandError> {
    let choice = question.options().and_then(|options| {
        if options.iter().any(|option| check_answer(&line, option)) {
            return None;
        }
        line.trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=options.len()).contains(n))
    });

    let outcome = match choice {
        Some(n) => session.choose_option(n - 1)?,
        None => {
            session.set_input(line);
            session.submit_input()?
        }
    };
    Ok(outcome)
}

fn print_question<W: Write>(
    output: &mut W,
    question: &Question,
    index: usize,
    total: usize,
) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "[{}/{}] {}: {}",
        index + 1,
        total,
        question.mode().display_name(),
        question.word.french
    )?;
    if let Some(options) = question.options() {
        for (i, option) in options.iter().enumerate() {
            writeln!(output, "  {}. {option}", i + 1)?;
        }
    }
    write!(output, "> ")?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::WordDraft;

    fn numeric_question(options: &[&str]) -> (PracticeSession, Question) {
        let word = WordDraft::new("deux", "2").into_word().unwrap();
        let options = options.iter().map(|o| o.to_string()).collect();
        let question = Question::multiple_choice(word, options);
        let mut session = PracticeSession::new();
        session.start(vec![question.clone()]).unwrap();
        (session, question)
    }

    #[test]
    fn test_option_text_wins_over_number() {
        let (mut session, question) = numeric_question(&["1", "3", "2"]);
        let outcome = submit(&mut session, &question, "2".to_string()).unwrap();
        assert!(outcome.is_correct);
        assert_eq!(session.answers()[0].response, "2");
    }

    #[test]
    fn test_number_matching_wrong_option_text_is_wrong() {
        let (mut session, question) = numeric_question(&["2", "3", "1"]);
        let outcome = submit(&mut session, &question, " 3 ".to_string()).unwrap();
        assert!(!outcome.is_correct);
    }

    #[test]
    fn test_number_picks_option_when_not_an_option_text() {
        let word = WordDraft::new("chat", "cat").into_word().unwrap();
        let question =
            Question::multiple_choice(word, vec!["dog".to_string(), "cat".to_string()]);
        let mut session = PracticeSession::new();
        session.start(vec![question.clone()]).unwrap();

        let outcome = submit(&mut session, &question, "2".to_string()).unwrap();
        assert!(outcome.is_correct);
        assert_eq!(session.answers()[0].response, "cat");
    }

    #[test]
    fn test_typing_question_takes_number_as_text() {
        let word = WordDraft::new("trois", "3").into_word().unwrap();
        let question = Question::typing(word);
        let mut session = PracticeSession::new();
        session.start(vec![question.clone()]).unwrap();

        assert!(submit(&mut session, &question, "3".to_string()).unwrap().is_correct);
    }
}
