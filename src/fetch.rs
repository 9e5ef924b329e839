//! Remote puzzle input retrieval.
//!
//! [`InputSource`] is the seam the pipeline's fetch action calls through;
//! [`PuzzleClient`] is the HTTP implementation that talks to the puzzle site.
//! A fetch is a single read-only GET with no retry and no timeout beyond the
//! transport default.

use crate::error::{Result, ScaffoldError};
use async_trait::async_trait;
use reqwest::header::COOKIE;
use tracing::debug;

/// Puzzle site used when the config does not override it.
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Something that can produce a day's puzzle input.
#[async_trait]
pub trait InputSource: Send + Sync {
    /// Return the raw puzzle input for `year`/`day_raw`.
    ///
    /// A missing credential is not an error here; the remote side decides.
    async fn fetch_input(
        &self,
        year: &str,
        day_raw: u64,
        credential: Option<&str>,
    ) -> Result<String>;
}

/// HTTP client for the puzzle site.
#[derive(Debug, Clone)]
pub struct PuzzleClient {
    base_url: String,
    http: reqwest::Client,
}

impl PuzzleClient {
    /// Create a client rooted at `base_url` (e.g. `https://adventofcode.com`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScaffoldError::Fetch(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{year}/day/{day_raw}/input`
    pub fn input_url(&self, year: &str, day_raw: u64) -> String {
        format!("{}/{}/day/{}/input", self.base_url, year, day_raw)
    }
}

#[async_trait]
impl InputSource for PuzzleClient {
    async fn fetch_input(
        &self,
        year: &str,
        day_raw: u64,
        credential: Option<&str>,
    ) -> Result<String> {
        let url = self.input_url(year, day_raw);
        debug!(%url, authenticated = credential.is_some(), "fetching puzzle input");

        let mut request = self.http.get(&url);
        if let Some(session) = credential {
            request = request.header(COOKIE, format!("session={}", session));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ScaffoldError::Fetch(format!("connection failed for '{}': {}", url, e))
            } else {
                ScaffoldError::Fetch(format!("request to '{}' failed: {}", url, e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScaffoldError::Fetch(format!(
                "HTTP {} from '{}' (is the session credential valid?)",
                status, url
            )));
        }

        let body = response.text().await.map_err(|e| {
            ScaffoldError::Fetch(format!("failed to read response body from '{}': {}", url, e))
        })?;

        debug!(bytes = body.len(), "puzzle input downloaded");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_input_url() {
        let client = PuzzleClient::new("https://adventofcode.com/").unwrap();
        assert_eq!(
            client.input_url("2023", 3),
            "https://adventofcode.com/2023/day/3/input"
        );
        assert_eq!(client.base_url(), "https://adventofcode.com");
    }

    #[tokio::test]
    async fn test_fetch_sends_session_cookie_and_returns_body_verbatim() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2023/day/3/input"))
            .and(header("cookie", "session=sess"))
            .respond_with(ResponseTemplate::new(200).set_body_string("467..114..\n...*......\n"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = PuzzleClient::new(mock_server.uri()).unwrap();
        let body = client.fetch_input("2023", 3, Some("sess")).await.unwrap();

        assert_eq!(body, "467..114..\n...*......\n");
    }

    #[tokio::test]
    async fn test_fetch_uses_unpadded_day() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2022/day/7/input"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = PuzzleClient::new(mock_server.uri()).unwrap();
        assert_eq!(client.fetch_input("2022", 7, None).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_fetch_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                "Puzzle inputs differ by user.  Please log in to get your puzzle input.",
            ))
            .mount(&mock_server)
            .await;

        let client = PuzzleClient::new(mock_server.uri()).unwrap();
        let err = client.fetch_input("2023", 1, None).await.unwrap_err();

        match err {
            ScaffoldError::Fetch(msg) => assert!(msg.contains("400"), "message: {}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_a_fetch_error() {
        let client = PuzzleClient::new("http://127.0.0.1:1").unwrap();
        let err = client.fetch_input("2023", 1, Some("sess")).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Fetch(_)));
    }
}
