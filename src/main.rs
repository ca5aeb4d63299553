use std::io;
use std::sync::Arc;

use signup_form_lib::bootstrap::tracing::init_tracing_subscriber;
use signup_form_lib::{build_orchestrator, load_config, run_console, ConsolePresenter};
use tokio::io::BufReader;
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %format!("{err:#}"), "failed to load engine config");
            return Err(err);
        }
    };

    let presenter = Arc::new(ConsolePresenter::new(io::stdout()));
    let orchestrator = build_orchestrator(&config, presenter);

    let stdin = BufReader::new(tokio::io::stdin());
    run_console(&orchestrator, stdin, &mut io::stdout()).await
}
