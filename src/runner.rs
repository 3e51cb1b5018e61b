// src/runner.rs
// =============================================================================
// This module drives a whole run: every target through every checker.
//
// How it works:
// 1. Validate all targets before touching the network
// 2. For each target: print its name underlined
// 3. From the second target on, wait a few seconds (be kind to the services)
// 4. For each checker: build the URL, fetch it, render it, print it
//
// Everything is sequential, one request in flight at a time. The first
// error of any kind ends the run; the caller decides how to report it.
// =============================================================================

use crate::checker::CheckerDescriptor;
use crate::error::CheckError;
use crate::fetch::Fetcher;
use crate::target::is_valid_url;
use log::info;
use std::io::Write;
use std::time::Duration;

/// Pause between two targets.
pub const TARGET_DELAY: Duration = Duration::from_secs(3);

/// Runs `targets` through `checkers`, writing the report to `out`.
pub async fn run_targets<W: Write>(
    fetcher: &Fetcher,
    checkers: &[CheckerDescriptor],
    targets: &[String],
    delay: Duration,
    out: &mut W,
) -> Result<(), CheckError> {
    if let Some(bad) = targets.iter().find(|t| !is_valid_url(t)) {
        return Err(CheckError::InvalidTarget(bad.clone()));
    }

    for (index, target) in targets.iter().enumerate() {
        info!("Checking {} ({}/{})", target, index + 1, targets.len());
        write!(out, "\n{}\n{}\n", target, "_".repeat(target.chars().count()))?;
        out.flush()?;

        if index > 0 {
            tokio::time::sleep(delay).await;
        }

        for checker in checkers {
            let url = checker.request_url(target);
            let body = fetcher.fetch(&url, checker.method).await?;
            let section = checker.render(&body, target)?;

            out.write_all(section.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}
