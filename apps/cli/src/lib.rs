//! Vocabulary flashcards application.
//!
//! Wires configuration, logging and SQLite storage to the practice engine in
//! `vocab-core`, behind a small command-line front end.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod state;

use clap::Parser;
use cli::{Cli, Command};
use commands::words::{describe, WordEdit};
use commands::CommandError;
use config::Config;
use db::SqliteRepository;
use state::AppState;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{Gender, WordDraft};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    tracing::debug!(path = %config.db_path.display(), "opening database");
    let repository = SqliteRepository::open(&config.db_path)?;
    let state = AppState::new(repository, config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&state, cli.command, stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Run one command against `state`.
pub fn execute<In, Out>(
    state: &AppState,
    command: Command,
    input: In,
    output: &mut Out,
) -> Result<(), CommandError>
where
    In: BufRead,
    Out: Write,
{
    let repo = &state.repository;
    match command {
        Command::Add {
            french,
            english,
            gender,
            example,
        } => {
            let draft = WordDraft {
                french,
                english,
                gender: parse_gender(gender.as_deref())?.unwrap_or_default(),
                example,
            };
            let word = commands::add_word(repo, draft)?;
            writeln!(output, "Added {}", describe(&word))?;
        }
        Command::List { search } => {
            let words = commands::list_words(repo, search.as_deref())?;
            if words.is_empty() {
                writeln!(output, "No words found.")?;
            }
            for word in &words {
                writeln!(output, "{}", describe(word))?;
            }
        }
        Command::Edit {
            id,
            french,
            english,
            gender,
            example,
        } => {
            let edit = WordEdit {
                french,
                english,
                gender: parse_gender(gender.as_deref())?,
                example,
            };
            let word = commands::edit_word(repo, &id, edit)?;
            writeln!(output, "Updated {}", describe(&word))?;
        }
        Command::Remove { id } => {
            commands::remove_word(repo, &id)?;
            writeln!(output, "Removed {id}")?;
        }
        Command::Practice { count } => {
            let count = count.unwrap_or(state.config.question_count);
            let mut rng = state.rng();
            commands::run_practice(repo, count, &mut rng, input, output)?;
        }
        Command::Stats => {
            let overview = commands::overview(repo)?;
            writeln!(output, "Words: {}", overview.word_count)?;
            writeln!(output, "Sessions: {}", overview.sessions.total_sessions)?;
            if let Some(last) = &overview.sessions.last_session {
                writeln!(
                    output,
                    "Last session: {} on {}",
                    last,
                    last.date.format("%Y-%m-%d")
                )?;
                writeln!(
                    output,
                    "Average accuracy: {:.0}%",
                    overview.sessions.average_accuracy * 100.0
                )?;
                writeln!(output, "Recent sessions:")?;
                for record in &overview.sessions.recent {
                    writeln!(
                        output,
                        "  {}  {}",
                        record.date.format("%Y-%m-%d %H:%M"),
                        record
                    )?;
                }
            }
            if !overview.can_practice {
                writeln!(
                    output,
                    "Add at least {} words to start practicing.",
                    vocab_core::MIN_VOCABULARY
                )?;
            }
        }
        Command::Clear { yes } => {
            if yes {
                repo.clear_all()?;
                writeln!(output, "All words and sessions deleted.")?;
            } else {
                writeln!(output, "This deletes every word and session. Re-run with --yes.")?;
            }
        }
    }
    Ok(())
}

fn parse_gender(raw: Option<&str>) -> Result<Option<Gender>, CommandError> {
    raw.map(Gender::parse).transpose().map_err(Into::into)
}
