//! Upstream document transport
//!
//! This module defines the `RawDocumentFetcher` trait for transport
//! abstraction, enabling the reconcile pipeline to run against real HTTP
//! ([`HttpFetcher`]) or a deterministic test double ([`MockFetcher`])
//! without coupling the library to either.
//!
//! # Example
//!
//! ```ignore
//! use localesync::fetch::{HttpFetcher, RawDocumentFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = HttpFetcher::new()?;
//!     let text = fetcher
//!         .fetch_raw_document("https://example.org/locales/fr.json")
//!         .await?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

/// Error from the transport collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The document does not exist at the given URL (or the URL is empty)
    NotFound(String),
    /// Network or protocol failure
    Transport(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound(msg) => write!(f, "Document not found: {}", msg),
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

/// Generic trait for upstream locale document transports
///
/// The reconcile pipeline depends only on this trait. Retry policy, if
/// any, belongs to the implementation; callers see each failure as-is.
#[async_trait]
pub trait RawDocumentFetcher: Send + Sync {
    /// Fetch the locale document text behind `url`
    ///
    /// # Arguments
    ///
    /// * `url` - Location of the upstream document
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The document text
    /// * `Err(FetchError)` - When the URL is empty, the document is
    ///   missing, or the transport fails
    async fn fetch_raw_document(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP transport backed by reqwest
///
/// Carries a request timeout so a stalled upstream cannot hang the
/// reconcile pipeline indefinitely.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Request timeout applied to every fetch
    const TIMEOUT_SECS: u64 = 30;

    /// Create a fetcher with its own HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New fetcher instance
    /// * `Err(FetchError)` - If HTTP client creation fails
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(Self::TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl RawDocumentFetcher for HttpFetcher {
    async fn fetch_raw_document(&self, url: &str) -> Result<String, FetchError> {
        if url.trim().is_empty() {
            return Err(FetchError::NotFound("URL is empty".to_string()));
        }

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Transport(format!(
                "Upstream returned {}: {}",
                status, body
            )));
        }

        Ok(response.text().await?)
    }
}

/// Mock fetch modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Serve a fixed document for every URL
    Document(String),

    /// Simulate a missing document
    NotFound,

    /// Simulate a transport failure with the given message
    Transport(String),
}

/// Mock transport that simulates upstream behavior
///
/// Useful for testing the reconcile pipeline without network access.
#[derive(Debug, Clone)]
pub struct MockFetcher {
    mode: MockMode,
}

impl MockFetcher {
    /// Create a new MockFetcher with the given mode
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mock = MockFetcher::new(MockMode::Document(r#"{"a":"Hi"}"#.to_string()));
    /// ```
    pub fn new(mode: MockMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl RawDocumentFetcher for MockFetcher {
    async fn fetch_raw_document(&self, url: &str) -> Result<String, FetchError> {
        if url.trim().is_empty() {
            return Err(FetchError::NotFound("URL is empty".to_string()));
        }

        match &self.mode {
            MockMode::Document(text) => Ok(text.clone()),
            MockMode::NotFound => Err(FetchError::NotFound(url.to_string())),
            MockMode::Transport(msg) => Err(FetchError::Transport(msg.clone())),
        }
    }
}
