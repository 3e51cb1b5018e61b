// src/error.rs
// =============================================================================
// This module defines the errors site-checker can run into, and the single
// place where runtime errors are turned into messages for the user.
//
// Two families of errors:
// - UsageError: the command line itself is wrong (reported on stderr by cli.rs)
// - CheckError: something went wrong while checking a site (reported here)
//
// Every CheckError ends the whole run. There is no per-site or per-checker
// recovery: one failing service stops everything that comes after it.
//
// Rust concepts:
// - thiserror: derive std::error::Error and Display for our own enums
// - #[source]: keeps the underlying error so it can be inspected later
// - Write trait: lets us print to stdout in main and to a Vec<u8> in tests
// =============================================================================

use reqwest::StatusCode;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the command line arguments.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("Please provide --site or --file as argument")]
    MissingInput,

    #[error("Please provide either --site or --file as argument (only one)")]
    ConflictingInput,

    #[error("argument -f/--file: can't open '{}': {}", path.display(), source)]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Anything that can stop a run once the arguments have been accepted.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A target did not look like `www.example.com`
    #[error("Expecting URL in format like www.example.com\nReceived: {0}")]
    InvalidTarget(String),

    /// The checker could not be reached, timed out, or the body could not be read
    #[error("{source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The checker answered with a non-2xx status
    #[error("{}", describe_status(*status, url))]
    HttpStatus { url: String, status: StatusCode },

    /// The checker answered, but not with what we know how to read
    #[error("{detail}")]
    Extraction {
        checker: &'static str,
        detail: String,
    },

    /// Writing the report to the terminal failed
    #[error(transparent)]
    Output(#[from] io::Error),
}

impl CheckError {
    /// Shorthand used by the extractors.
    pub fn extraction(checker: &'static str, detail: impl Into<String>) -> Self {
        CheckError::Extraction {
            checker,
            detail: detail.into(),
        }
    }
}

// Formats a status the way people are used to reading it, e.g.
// "404 Client Error: Not Found for url: https://..."
fn describe_status(status: StatusCode, url: &str) -> String {
    let class = if status.is_client_error() {
        "Client"
    } else if status.is_server_error() {
        "Server"
    } else {
        "Unexpected"
    };
    let reason = status.canonical_reason().unwrap_or("Unknown");

    format!("{} {} Error: {} for url: {}", status.as_u16(), class, reason, url)
}

/// Prints the diagnostic for a failed run.
///
/// The caller is expected to exit with a non-zero code afterwards; this
/// function only does the talking.
pub fn report(error: &CheckError, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;

    match error {
        CheckError::InvalidTarget(_) => {
            writeln!(out, "{}", error)?;
        }
        CheckError::Network { url, source } => {
            writeln!(out, "URL: {}", url)?;
            writeln!(out)?;
            if source.is_connect() || source.is_timeout() {
                writeln!(out, "Connection Error: {}", source)?;
                writeln!(out, "Please check your internet connection.")?;
            } else {
                writeln!(out, "Error: {}", source)?;
            }
        }
        CheckError::HttpStatus { url, .. } => {
            writeln!(out, "URL: {}", url)?;
            writeln!(out)?;
            writeln!(out, "HTTP Error: {}", error)?;
        }
        CheckError::Extraction { checker, detail } => {
            writeln!(out, "Unexpected response or invalid JSON response.")?;
            writeln!(out)?;
            writeln!(out, "Error in {} results: {}", checker, detail)?;
        }
        CheckError::Output(e) => {
            writeln!(out, "Error: {}", e)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Exiting.")?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(error: &CheckError) -> String {
        let mut out = Vec::new();
        report(error, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_http_status_message() {
        let error = CheckError::HttpStatus {
            url: "https://sitecheck.sucuri.net/results/nope.com".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        let text = render(&error);
        assert!(text.contains("URL: https://sitecheck.sucuri.net/results/nope.com"));
        assert!(text.contains("HTTP Error: 404 Client Error: Not Found for url: "));
        assert!(text.trim_end().ends_with("Exiting."));
    }

    #[test]
    fn test_server_error_class() {
        let error = CheckError::HttpStatus {
            url: "http://x".to_string(),
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(
            error.to_string(),
            "502 Server Error: Bad Gateway for url: http://x"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_message() {
        // A port that was just released has nobody listening on it
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}/x", port);
        let source = reqwest::get(&url).await.unwrap_err();
        let error = CheckError::Network {
            url: url.clone(),
            source,
        };

        let text = render(&error);
        assert!(text.contains(&format!("URL: {}\n\nConnection Error: ", url)));
        assert!(text.contains("Please check your internet connection.\n"));
        assert!(!text.contains("\nError: "));
        assert!(text.trim_end().ends_with("Exiting."));
    }

    #[tokio::test]
    async fn test_other_transport_failure_message() {
        // Not a URL at all, so reqwest fails before any connection is tried
        let source = reqwest::get("not a url").await.unwrap_err();
        assert!(!source.is_connect() && !source.is_timeout());
        let error = CheckError::Network {
            url: "not a url".to_string(),
            source,
        };

        let text = render(&error);
        assert!(text.contains("URL: not a url\n\nError: "));
        assert!(!text.contains("Please check your internet connection."));
    }

    #[test]
    fn test_invalid_target_message() {
        let text = render(&CheckError::InvalidTarget("not_a_url".to_string()));
        assert!(text.contains("Expecting URL in format like www.example.com"));
        assert!(text.contains("Received: not_a_url"));
    }

    #[test]
    fn test_extraction_message() {
        let text = render(&CheckError::extraction("W3 CSS3 VALIDATION", "missing field `result`"));
        assert!(text.contains("Unexpected response or invalid JSON response."));
        assert!(text.contains("Error in W3 CSS3 VALIDATION results: missing field `result`"));
    }

    #[test]
    fn test_usage_error_mentions_os_message() {
        let source = io::Error::from(io::ErrorKind::NotFound);
        let error = UsageError::UnreadableFile {
            path: PathBuf::from("/nope/sites.txt"),
            source,
        };
        let text = error.to_string();
        assert!(text.starts_with("argument -f/--file: can't open '/nope/sites.txt': "));
    }
}
