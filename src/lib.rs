//! Sign-up form console
//!
//! Bootstrap and presentation adapters around the `sf-*` engine crates.

pub mod adapters;
pub mod bootstrap;

pub use adapters::console::{ConsoleCommand, ConsolePresenter};
pub use bootstrap::{build_orchestrator, load_config, run_console};
