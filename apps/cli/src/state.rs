//! Application state.

use crate::config::Config;
use crate::db::SqliteRepository;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Repository and configuration handed to every command.
pub struct AppState {
    pub repository: SqliteRepository,
    pub config: Config,
}

impl AppState {
    pub fn new(repository: SqliteRepository, config: Config) -> Self {
        Self { repository, config }
    }

    /// Random source for one practice session.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
