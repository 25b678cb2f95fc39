//! Plain-text rendering of a run for the console.

use std::fmt::Write;

use crate::{config::{Mode, RunConfig}, session::RunSummary};

/// The configuration echo printed before a run.
pub fn render_config(config: &RunConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Network configuration: {}", config.topology());
    if config.mode == Mode::Train {
        let _ = writeln!(out, "Training configuration:");
        let _ = writeln!(out, "  Random number range: {} to {}", config.low, config.high);
        let _ = writeln!(out, "  Max iterations: {}", config.max_iterations);
        let _ = writeln!(out, "  Error threshold: {}", config.error_threshold);
        let _ = writeln!(out, "  Lambda: {}", config.learning_rate);
        let _ = writeln!(out, "  Truth table: {}", config.truth_table);
    }
    out
}

/// One row per case: optional input columns, optional target column (training
/// only) and the network output, tab separated.
pub fn render_results(summary: &RunSummary) -> String {
    let config = &summary.config;
    let show_targets = config.show_truth_table && summary.cases.targets().is_some();
    let mut out = String::new();

    if config.show_input_table {
        out.push_str("Input");
        out.push_str(&"\t".repeat(summary.cases.width()));
    }
    if show_targets {
        out.push_str("Target\t");
    }
    out.push_str("Output\n");

    for (i, output) in summary.results.iter().enumerate() {
        if config.show_input_table {
            for value in &summary.cases.inputs()[i] {
                let _ = write!(out, "{value:?}\t");
            }
        }
        if show_targets {
            if let Some(targets) = summary.cases.targets() {
                let _ = write!(out, "{:?}\t", targets[i]);
            }
        }
        let _ = writeln!(out, "{output}");
    }
    out
}
