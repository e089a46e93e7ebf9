//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "vocab")]
#[command(about = "French vocabulary flashcards")]
#[command(
    after_help = "Environment:\n  \
        VOCAB_DB_PATH         Database file\n  \
        VOCAB_QUESTION_COUNT  Questions per session\n  \
        VOCAB_SEED            Fixed random seed\n  \
        RUST_LOG              Log filter"
)]
pub struct Cli {
    /// Database file, overriding VOCAB_DB_PATH.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a word pair.
    Add {
        french: String,
        english: String,
        /// m, f or none.
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        example: Option<String>,
    },
    /// List words, newest first.
    List {
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Edit fields of a word.
    Edit {
        id: String,
        #[arg(long)]
        french: Option<String>,
        #[arg(long)]
        english: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        /// Empty string removes the example.
        #[arg(long)]
        example: Option<String>,
    },
    /// Delete a word.
    Remove { id: String },
    /// Run a practice session.
    Practice {
        #[arg(long, short)]
        count: Option<usize>,
    },
    /// Show vocabulary and session statistics.
    Stats,
    /// Delete all words and sessions.
    Clear {
        #[arg(long)]
        yes: bool,
    },
}
