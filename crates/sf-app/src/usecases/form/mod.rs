//! Form use cases.
//!
//! This module exposes the form orchestrator.

mod context;
mod event;
pub mod orchestrator;
mod task;

pub use context::FormContext;
pub use event::FormEvent;
pub use orchestrator::{FormError, FormOrchestrator, SettleReport};
pub use task::PendingTask;
