//! Post page retrieval.
//!
//! The fetcher itself is a boundary: anything that can turn a URL into a
//! status and a body implements [`DocumentFetcher`]. The pipeline only decides
//! which URLs to ask for and when to give up.

use std::future::Future;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::Config;
use crate::error_handling::{ExtractionError, TransportError};
use crate::identifier::PostId;

use super::request::RequestHeaders;

/// Raw response to one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    /// HTTP status code
    pub status: u16,
    /// Response body decoded as text
    pub body: String,
}

impl FetchedDocument {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Retrieves a page by URL.
///
/// Implementations must be safe to share between concurrent extractions.
pub trait DocumentFetcher: Send + Sync {
    /// Fetches `url`, returning any HTTP status with its body.
    ///
    /// Only network-level failures (DNS, refused connection, timeout, broken
    /// body) are errors; a 404 is a successful fetch with status 404.
    fn fetch(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<FetchedDocument, TransportError>> + Send;
}

/// [`DocumentFetcher`] over a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
    accept_language: String,
}

impl HttpFetcher {
    /// Wraps `client`, sending the configured Accept-Language on every request.
    pub fn new(client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self {
            client,
            accept_language: config.accept_language.clone(),
        }
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument, TransportError> {
        let request =
            RequestHeaders::apply_to_request_builder(self.client.get(url), &self.accept_language);
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Fetched {} ({} bytes, status {})", url, body.len(), status);
        Ok(FetchedDocument { status, body })
    }
}

/// A post page that was served successfully.
#[derive(Debug, Clone)]
pub struct PostDocument {
    /// The URL that served the page
    pub url: String,
    pub body: String,
}

/// Primary page URL: `<base>/post/<id>`.
pub fn primary_post_url(base_url: &str, post_id: &PostId) -> String {
    format!("{}/post/{}", base_url.trim_end_matches('/'), post_id)
}

/// Fallback page URL: `<base>/channel/community?lb=<id>`.
pub fn fallback_post_url(base_url: &str, post_id: &PostId) -> String {
    format!(
        "{}/channel/community?lb={}",
        base_url.trim_end_matches('/'),
        post_id
    )
}

/// Fetches the post page, trying the primary URL and then the fallback URL.
///
/// The fallback is requested only when the primary answers with a non-success
/// status. No other retries are made.
///
/// # Errors
///
/// - `ExtractionError::FetchFailed` if both pages answer with a non-success
///   status, or a request times out
/// - `ExtractionError::Transport` for any other network-level failure
pub async fn fetch_post_document<F: DocumentFetcher>(
    fetcher: &F,
    base_url: &str,
    post_id: &PostId,
) -> Result<PostDocument, ExtractionError> {
    let primary_url = primary_post_url(base_url, post_id);
    info!("Fetching post page {}", primary_url);
    let primary = fetcher.fetch(&primary_url).await?;
    if primary.is_success() {
        return Ok(PostDocument {
            url: primary_url,
            body: primary.body,
        });
    }

    let fallback_url = fallback_post_url(base_url, post_id);
    warn!(
        "Post page {} returned status {}, trying {}",
        primary_url, primary.status, fallback_url
    );
    let fallback = fetcher.fetch(&fallback_url).await?;
    if fallback.is_success() {
        return Ok(PostDocument {
            url: fallback_url,
            body: fallback.body,
        });
    }

    warn!(
        "Fallback page {} returned status {}",
        fallback_url, fallback.status
    );
    Err(ExtractionError::FetchFailed {
        reason: format!(
            "{} returned {}, {} returned {}",
            primary_url, primary.status, fallback_url, fallback.status
        ),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory fetcher answering from a fixed URL table.
    ///
    /// Unknown URLs answer 404.
    #[derive(Default)]
    pub(crate) struct StubFetcher {
        responses: HashMap<String, Result<FetchedDocument, TransportError>>,
        pub(crate) requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        pub(crate) fn with_page(mut self, url: &str, status: u16, body: &str) -> Self {
            self.responses.insert(
                url.to_string(),
                Ok(FetchedDocument {
                    status,
                    body: body.to_string(),
                }),
            );
            self
        }

        pub(crate) fn with_error(mut self, url: &str, error: TransportError) -> Self {
            self.responses.insert(url.to_string(), Err(error));
            self
        }

        pub(crate) fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl DocumentFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedDocument, TransportError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.responses.get(url).cloned().unwrap_or(Ok(FetchedDocument {
                status: 404,
                body: String::new(),
            }))
        }
    }

    const BASE: &str = "https://www.youtube.com";

    fn post_id() -> PostId {
        crate::identifier::extract_post_id("https://www.youtube.com/post/Ugkx1").unwrap()
    }

    #[test]
    fn test_post_urls() {
        let id = post_id();
        assert_eq!(
            primary_post_url("https://www.youtube.com/", &id),
            "https://www.youtube.com/post/Ugkx1"
        );
        assert_eq!(
            fallback_post_url(BASE, &id),
            "https://www.youtube.com/channel/community?lb=Ugkx1"
        );
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let fetcher = StubFetcher::default().with_page(
            "https://www.youtube.com/post/Ugkx1",
            200,
            "<html>primary</html>",
        );
        let doc = fetch_post_document(&fetcher, BASE, &post_id()).await.unwrap();
        assert_eq!(doc.body, "<html>primary</html>");
        assert_eq!(fetcher.requested().len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_used_after_non_success() {
        let fetcher = StubFetcher::default()
            .with_page("https://www.youtube.com/post/Ugkx1", 500, "")
            .with_page(
                "https://www.youtube.com/channel/community?lb=Ugkx1",
                200,
                "<html>fallback</html>",
            );
        let doc = fetch_post_document(&fetcher, BASE, &post_id()).await.unwrap();
        assert_eq!(doc.url, "https://www.youtube.com/channel/community?lb=Ugkx1");
        assert_eq!(doc.body, "<html>fallback</html>");
        assert_eq!(fetcher.requested().len(), 2);
    }

    #[tokio::test]
    async fn test_both_non_success_is_fetch_failed() {
        let fetcher = StubFetcher::default();
        let err = fetch_post_document(&fetcher, BASE, &post_id())
            .await
            .unwrap_err();
        match err {
            ExtractionError::FetchFailed { reason } => assert!(reason.contains("404")),
            other => panic!("expected FetchFailed, got {other:?}"),
        }
        assert_eq!(fetcher.requested().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_error_on_primary_is_not_retried() {
        let fetcher = StubFetcher::default().with_error(
            "https://www.youtube.com/post/Ugkx1",
            TransportError::new("dns error: no such host"),
        );
        let err = fetch_post_document(&fetcher, BASE, &post_id())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ExtractionError::Transport("dns error: no such host".to_string())
        );
        assert_eq!(fetcher.requested().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_on_fallback_surfaces() {
        let fetcher = StubFetcher::default()
            .with_page("https://www.youtube.com/post/Ugkx1", 503, "")
            .with_error(
                "https://www.youtube.com/channel/community?lb=Ugkx1",
                TransportError::new("connection reset by peer"),
            );
        let err = fetch_post_document(&fetcher, BASE, &post_id())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ExtractionError::Transport("connection reset by peer".to_string())
        );
        assert_eq!(fetcher.requested().len(), 2);
    }

    #[tokio::test]
    async fn test_timeout_on_fallback_is_fetch_failed() {
        let fetcher = StubFetcher::default()
            .with_page("https://www.youtube.com/post/Ugkx1", 503, "")
            .with_error(
                "https://www.youtube.com/channel/community?lb=Ugkx1",
                TransportError::timeout("operation timed out"),
            );
        let err = fetch_post_document(&fetcher, BASE, &post_id())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::FetchFailed { .. }));
    }
}
