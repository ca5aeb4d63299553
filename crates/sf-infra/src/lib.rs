//! # sf-infra
//!
//! Adapters behind the `sf-core` ports: a tokio timer, the random sources and
//! the TOML config file loader.

pub mod config;
pub mod random;
pub mod time;

pub use config::{default_config_path, load_engine_config, load_or_default};
pub use random::{random_from_config, ScriptedRandom, SeededRandom, ThreadRandom};
pub use time::TokioTimer;
