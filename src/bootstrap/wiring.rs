//! # Dependency injection
//!
//! The only place that depends on `sf-app` and `sf-infra` together. It
//! assembles; it does not decide.

use std::sync::Arc;

use sf_app::FormOrchestrator;
use sf_core::ports::FormPresenterPort;
use sf_core::EngineConfig;
use sf_infra::random::random_from_config;
use sf_infra::time::TokioTimer;

pub fn build_orchestrator(
    config: &EngineConfig,
    presenter: Arc<dyn FormPresenterPort>,
) -> FormOrchestrator {
    FormOrchestrator::new(
        config,
        Arc::new(TokioTimer::new()),
        random_from_config(&config.random),
        presenter,
    )
}
