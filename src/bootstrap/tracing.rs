//! Tracing configuration for the sign-up form console
//!
//! ## Behavior
//!
//! - **Development**: debug level for the engine crates
//! - **Production**: info level
//! - **Writer**: stderr, so stdout carries only rendered form views
//! - **Environment filter**: `RUST_LOG` overrides the defaults

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        "warn".to_string(),
        format!("signup_form_lib={level}"),
        format!("signup_form={level}"),
        format!("sf_core={level}"),
        format!("sf_app={level}"),
        format!("sf_infra={level}"),
    ]
}

/// Initialize the tracing subscriber.
///
/// ## Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
