// src/fetch.rs
// =============================================================================
// This module makes the HTTP requests to the checker services.
//
// Key functionality:
// - One reqwest Client for the whole run (built once, reused per request)
// - A fixed browser-like User-Agent, since some services refuse bare clients
// - A fixed 60 second timeout per request
// - Any non-2xx status is a hard failure
//
// Rust concepts:
// - async/await: reqwest is async, so fetch() is too
// - map_err: converting library errors into our own CheckError
// - Enums: RequestMethod says which HTTP verb a checker wants
// =============================================================================

use crate::error::CheckError;
use log::debug;
use reqwest::{Client, Method};
use std::fmt;
use std::time::Duration;

/// Sent with every request.
pub const USER_AGENT: &str = "Mozilla";

/// How long a single checker gets to answer.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// The HTTP verbs the checker services expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl RequestMethod {
    fn as_method(self) -> Method {
        match self {
            RequestMethod::Get => Method::GET,
            RequestMethod::Post => Method::POST,
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_method().as_str())
    }
}

/// Thin wrapper around a configured reqwest client.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds a fetcher with the standard timeout.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Builds a fetcher with a custom timeout (tests use a short one).
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Fetcher { client })
    }

    /// Requests `url` and returns the response body as text.
    ///
    /// Fails with `CheckError::Network` when the service can't be reached or
    /// the body can't be read, and `CheckError::HttpStatus` for any non-2xx
    /// answer.
    pub async fn fetch(&self, url: &str, method: RequestMethod) -> Result<String, CheckError> {
        debug!("{} {}", method, url);

        let response = self
            .client
            .request(method.as_method(), url)
            .send()
            .await
            .map_err(|source| network_error(url, source))?;

        let status = response.status();
        debug!("{} answered {}", url, status);

        if !status.is_success() {
            return Err(CheckError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        response
            .text()
            .await
            .map_err(|source| network_error(url, source))
    }
}

fn network_error(url: &str, source: reqwest::Error) -> CheckError {
    CheckError::Network {
        url: url.to_string(),
        source,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why wrap Client in our own struct?
//    - The rest of the program only needs "give me the body of this URL"
//    - Keeping the builder settings here means nobody else can forget them
//
// 2. What does map_err do?
//    - Result<T, E1> -> Result<T, E2> by transforming only the error side
//    - Here it attaches the URL we were fetching to reqwest's error
//
// 3. Why is a 404 not an Err from reqwest?
//    - reqwest only fails when there is no response at all
//    - A 404 is a perfectly good HTTP response, so we check status ourselves
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::TestServer;

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = TestServer::start(vec![("/ok", 200, "hello checker".to_string())]).await;
        let fetcher = Fetcher::with_timeout(Duration::from_secs(5)).unwrap();

        let body = fetcher
            .fetch(&server.url("/ok"), RequestMethod::Get)
            .await
            .unwrap();
        assert_eq!(body, "hello checker");
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent_and_method() {
        let server = TestServer::start(vec![("/scan", 200, String::new())]).await;
        let fetcher = Fetcher::with_timeout(Duration::from_secs(5)).unwrap();

        fetcher
            .fetch(&server.url("/scan/example.com"), RequestMethod::Post)
            .await
            .unwrap();

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("POST /scan/example.com "));
        assert!(requests[0].to_lowercase().contains("user-agent: mozilla"));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = TestServer::start(vec![("/missing", 404, "nope".to_string())]).await;
        let fetcher = Fetcher::with_timeout(Duration::from_secs(5)).unwrap();

        let error = fetcher
            .fetch(&server.url("/missing"), RequestMethod::Get)
            .await
            .unwrap_err();
        match error {
            CheckError::HttpStatus { status, url } => {
                assert_eq!(status.as_u16(), 404);
                assert!(url.ends_with("/missing"));
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind and immediately drop a listener to get a port nobody serves
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let fetcher = Fetcher::with_timeout(Duration::from_secs(5)).unwrap();

        let error = fetcher
            .fetch(&format!("http://127.0.0.1:{}/", port), RequestMethod::Get)
            .await
            .unwrap_err();
        match error {
            CheckError::Network { source, .. } => assert!(source.is_connect()),
            other => panic!("expected Network, got {:?}", other),
        }
    }

    #[test]
    fn test_method_display() {
        assert_eq!(RequestMethod::Get.to_string(), "GET");
        assert_eq!(RequestMethod::Post.to_string(), "POST");
    }
}
