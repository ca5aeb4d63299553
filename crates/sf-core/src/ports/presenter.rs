use anyhow::Result;

use crate::form::FormView;

/// Presentation surface the orchestrator pushes every visible change to.
#[async_trait::async_trait]
pub trait FormPresenterPort: Send + Sync {
    async fn render(&self, view: &FormView) -> Result<()>;
}
