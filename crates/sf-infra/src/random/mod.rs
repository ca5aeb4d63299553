//! Random sources for the simulated server.

mod scripted;
mod seeded;

use std::sync::Arc;

use rand::Rng;
use sf_core::config::RandomConfig;
use sf_core::ports::RandomPort;
use tracing::info;

pub use scripted::ScriptedRandom;
pub use seeded::SeededRandom;

/// Thread-local RNG. Different every session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomPort for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Pick the random source the config asks for.
pub fn random_from_config(config: &RandomConfig) -> Arc<dyn RandomPort> {
    match config.seed {
        Some(seed) => {
            info!(seed, "using seeded random source");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    }
}
