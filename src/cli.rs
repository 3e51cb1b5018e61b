// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two ways to say what to check:
//   site-checker --site www.example.com
//   site-checker --file sites.txt      (one domain per line)
//
// Exactly one of them must be given. clap parses the flags; the "exactly one"
// rule and reading the file happen in Cli::targets() so the messages can be
// worded the way we want them.
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - Option<T>: a flag the user may or may not have passed
// - match on a tuple: checking both flags at once
// =============================================================================

use crate::checker::registry;
use crate::error::UsageError;
use crate::target::read_targets;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "site-checker",
    version,
    about = "Check one or more web sites for reputation, security, page speed, and markup/CSS validity",
    long_about = "site-checker sends a domain (or every domain listed in a file) to a set of public \
                  checker services and prints a readable summary of what each of them reports."
)]
pub struct Cli {
    /// Site to check. Example: www.google.com
    #[arg(short, long, value_name = "site")]
    pub site: Option<String>,

    /// Path to a file containing one or more sites to check,
    /// one per line in the format www.google.com
    #[arg(short, long, value_name = "file")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Parses the process arguments. `--help` lists the checks performed.
    pub fn parse_with_checks() -> Self {
        let matches = Self::command().after_help(checks_overview()).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Resolves the flags into the list of targets to check.
    ///
    /// Targets from a file are not validated here; that is the runner's job.
    pub fn targets(&self) -> Result<Vec<String>, UsageError> {
        match (&self.site, &self.file) {
            (None, None) => Err(UsageError::MissingInput),
            (Some(_), Some(_)) => Err(UsageError::ConflictingInput),
            // `--site ""` names nothing to check
            (Some(site), None) if site.is_empty() => Err(UsageError::MissingInput),
            (Some(site), None) => Ok(vec![site.clone()]),
            (None, Some(path)) => read_targets(path).map_err(|source| UsageError::UnreadableFile {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Prints a usage error to stderr the way argument errors are usually shown:
/// the usage line first, the complaint last.
pub fn print_usage_error(error: &UsageError) {
    let mut command = Cli::command();
    eprintln!("{}", command.render_usage());
    eprintln!("{}: error: {}", command.get_name(), error);
}

// The "what will I get" list shown under --help
fn checks_overview() -> String {
    let mut overview = String::from("Output (per site):\n");
    for checker in registry() {
        overview.push_str(&format!(" - {}\n", checker.name));
    }
    overview
}
