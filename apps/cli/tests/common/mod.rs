//! Common test utilities for integration tests.
//!
//! Every context runs against an in-memory SQLite database with a fixed
//! random seed, so question order is reproducible.

#![allow(dead_code)]

pub mod fixtures;

use std::io::Cursor;
use std::path::PathBuf;

use vocab_flashcards::cli::Command;
use vocab_flashcards::commands::CommandError;
use vocab_flashcards::config::Config;
use vocab_flashcards::db::SqliteRepository;
use vocab_flashcards::execute;
use vocab_flashcards::state::AppState;

pub const TEST_SEED: u64 = 7;

/// Test context wrapping application state.
pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        let repository = SqliteRepository::open_in_memory().expect("open in-memory database");
        let config = Config {
            db_path: PathBuf::from(":memory:"),
            question_count: 10,
            seed: Some(TEST_SEED),
            log_filter: "info".to_string(),
        };
        Self {
            state: AppState::new(repository, config),
        }
    }

    /// Context with the first `n` fixture words stored.
    pub fn with_words(n: usize) -> Self {
        let ctx = Self::new();
        fixtures::seed_words(&ctx.state.repository, n);
        ctx
    }

    pub fn repo(&self) -> &SqliteRepository {
        &self.state.repository
    }

    /// Run a command with `input` as stdin, returning what it printed.
    pub fn run(&self, command: Command, input: &str) -> Result<String, CommandError> {
        let mut output = Vec::new();
        execute(&self.state, command, Cursor::new(input), &mut output)?;
        Ok(String::from_utf8(output).expect("utf-8 output"))
    }
}
