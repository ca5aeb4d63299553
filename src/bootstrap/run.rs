//! Console session loop.

use std::io::Write;

use sf_app::{FormOrchestrator, SettleReport};
use sf_core::TaskOutcome;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, info_span, warn, Instrument};

use crate::adapters::console::{
    format_view, parse_command, CommandParseError, ConsoleCommand, HELP_TEXT,
};

/// Feed console lines to the orchestrator until `quit` or end of input.
///
/// Views are rendered by the orchestrator's presenter; `out` receives help,
/// parse errors and `wait` summaries.
pub async fn run_console<R, W>(
    orchestrator: &FormOrchestrator,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let span = info_span!("console.session");
    async {
        info!("console session started");
        writeln!(out, "{HELP_TEXT}")?;
        write!(out, "{}", format_view(&orchestrator.view().await))?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(CommandParseError::Empty) => continue,
                Err(err) => {
                    warn!(error = %err, "rejected console command");
                    writeln!(out, "error: {err}")?;
                    continue;
                }
            };

            if !execute(orchestrator, command, out).await? {
                break;
            }
        }

        info!("console session ended");
        Ok(())
    }
    .instrument(span)
    .await
}

/// Returns `false` when the session should end.
async fn execute<W: Write>(
    orchestrator: &FormOrchestrator,
    command: ConsoleCommand,
    out: &mut W,
) -> anyhow::Result<bool> {
    match command {
        ConsoleCommand::Set { field, value } => {
            orchestrator.value_changed(field, value).await?;
        }
        ConsoleCommand::Blur(field) => {
            orchestrator.blurred(field).await?;
        }
        ConsoleCommand::Check(checkbox) => {
            orchestrator.checkbox_toggled(checkbox, true).await?;
        }
        ConsoleCommand::Uncheck(checkbox) => {
            orchestrator.checkbox_toggled(checkbox, false).await?;
        }
        ConsoleCommand::Submit => {
            orchestrator.submit().await?;
        }
        ConsoleCommand::Retry => {
            orchestrator.retry().await?;
        }
        ConsoleCommand::Reset => {
            orchestrator.reset().await?;
        }
        ConsoleCommand::Wait => {
            let report = orchestrator.settle().await;
            writeln!(out, "{}", summarize(&report))?;
        }
        ConsoleCommand::Show => {
            write!(out, "{}", format_view(&orchestrator.view().await))?;
        }
        ConsoleCommand::Help => {
            writeln!(out, "{HELP_TEXT}")?;
        }
        ConsoleCommand::Quit => return Ok(false),
    }
    Ok(true)
}

fn count<T>(outcomes: &[TaskOutcome<T>]) -> (usize, usize) {
    let discarded = outcomes.iter().filter(|o| o.is_superseded()).count();
    (outcomes.len() - discarded, discarded)
}

fn summarize(report: &SettleReport) -> String {
    let (checks, stale_checks) = count(&report.availability);
    let (submissions, stale_submissions) = count(&report.submission);
    format!(
        "settled: {checks} availability check(s), {submissions} submission(s); \
         discarded {} stale result(s)",
        stale_checks + stale_submissions
    )
}
