//! Sign-up form application orchestration layer
//!
//! This crate contains the form use cases and the runtime orchestration that
//! turns input events into snapshot mutations, deferred simulated responses
//! and rendered views.

pub mod usecases;

pub use usecases::form::{FormError, FormEvent, FormOrchestrator, PendingTask, SettleReport};
