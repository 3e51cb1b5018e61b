// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr, quiet unless RUST_LOG says otherwise)
// 2. Parse command-line arguments using clap
// 3. Turn them into a list of sites to check
// 4. Run every site through every checker and print the report
// 5. Exit with proper code (0 = success, 1 = a check failed, 2 = bad usage)
//
// Rust concepts used:
// - async/await: reqwest is an async HTTP client, so main runs on tokio
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to pick the right exit code
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - the five checker services and their extractors
mod cli; // src/cli.rs - command-line parsing
mod error; // src/error.rs - error types and the failure report
mod fetch; // src/fetch.rs - HTTP requests
mod runner; // src/runner.rs - drives targets through checkers
mod target; // src/target.rs - domain validation and target files

#[cfg(test)]
mod test_server;

use anyhow::{Context, Result};
use cli::Cli;
use env_logger::Env;
use fetch::Fetcher;
use log::{info, warn};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Something went wrong outside of the checks themselves
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = every site went through every checker
//   Ok(1) = a check failed and the run was stopped
//   Ok(2) = the command line was wrong
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse_with_checks();

    let targets = match cli.targets() {
        Ok(targets) => targets,
        Err(usage) => {
            cli::print_usage_error(&usage);
            return Ok(2);
        }
    };

    if targets.is_empty() {
        warn!("No sites to check");
        return Ok(0);
    }
    info!("{} site(s) to check", targets.len());

    let fetcher = Fetcher::new().context("failed to set up the HTTP client")?;
    let checkers = checker::registry();
    let mut stdout = std::io::stdout();

    match runner::run_targets(&fetcher, &checkers, &targets, runner::TARGET_DELAY, &mut stdout).await {
        Ok(()) => Ok(0),
        Err(e) => {
            error::report(&e, &mut stdout).context("failed to print the error report")?;
            Ok(1)
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does main() not return Result?
//    - We want to choose the exit code ourselves (0, 1 or 2)
//    - std::process::exit() lets us do that after printing our own messages
//
// 2. What does {:#} do for an anyhow error?
//    - It prints the whole chain: "failed to set up the HTTP client: <cause>"
//    - Plain {} would only print the outermost message
//
// 3. Why pass &mut stdout into the runner instead of using println!?
//    - The runner only needs "something it can write to"
//    - Tests hand it a Vec<u8> and then look at what was written
// -----------------------------------------------------------------------------
