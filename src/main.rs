// Runs an A-B-1 network as described by a JSON config file:
//   ab1-net [CONFIG.json]
// Without a path the built-in defaults are used (2-2-1, XOR, random weights).
// Set RUST_LOG=info (or debug) to follow training progress.
use std::process::ExitCode;

use ab1_net::{execute, report, RunConfig};

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::load_json(&path),
        None => Ok(RunConfig::default()),
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", report::render_config(&config));

    let summary = match execute(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(training) = &summary.report {
        println!("\n{training}");
    }
    println!("\nRun Results:");
    print!("{}", report::render_results(&summary));

    ExitCode::SUCCESS
}
