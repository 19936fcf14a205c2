//! Rendering of a run for the terminal.

use capsize_core::OutputFormat;

use crate::error::RunnerError;
use crate::run::RunOutcome;

/// Render `outcome` in the requested format.
///
/// Text output prints a `[ ! ] <name> has died` line per death, crash by
/// crash, followed by the canoe's status block. JSON output is a single
/// pretty-printed document.
pub fn render(outcome: &RunOutcome, format: OutputFormat) -> Result<String, RunnerError> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
    }
}

fn render_text(outcome: &RunOutcome) -> String {
    let mut out = String::new();
    for report in &outcome.crashes {
        for notice in report.death_notices() {
            out.push_str(&notice);
            out.push('\n');
        }
    }
    out.push_str(&outcome.status.to_string());
    out
}
