//! top_comments library: most-liked comments of a community post
//!
//! This library fetches a community post page, recovers its comments from the
//! embedded page data (or from the rendered comment markup when the data is
//! missing), and returns them ranked by like count.
//!
//! # Example
//!
//! ```no_run
//! use top_comments::{CommentExtractor, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     limit: 10,
//!     ..Default::default()
//! };
//! let extractor = CommentExtractor::from_config(&config)?;
//!
//! let comments = extractor
//!     .extract_top_comments("https://www.youtube.com/post/UgkxAbC123", config.limit)
//!     .await?;
//! for comment in &comments {
//!     println!("{} ({} likes): {}", comment.author, comment.likes, comment.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
mod fetch;
mod identifier;
pub mod initialization;
mod models;
mod parse;
mod rank;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{ExtractionError, FailureKind, InitializationError, TransportError};
pub use fetch::{DocumentFetcher, FetchedDocument, HttpFetcher};
pub use identifier::{extract_post_id, PostId};
pub use models::CommentRecord;
pub use run::{extract_top_comments, CommentExtractor, ExtractionResult};

// Internal run module (contains the extraction pipeline)
mod run {
    use log::info;

    use crate::config::Config;
    use crate::error_handling::{ExtractionError, ExtractionStats, InitializationError};
    use crate::fetch::{fetch_post_document, DocumentFetcher, HttpFetcher};
    use crate::identifier::extract_post_id;
    use crate::initialization::init_client;
    use crate::models::CommentRecord;
    use crate::rank::rank_comments;

    /// Outcome of one extraction: ranked comments or the terminal failure.
    pub type ExtractionResult = Result<Vec<CommentRecord>, ExtractionError>;

    /// Extracts the most-liked comments of community posts.
    ///
    /// Holds no per-request state, so one extractor can serve any number of
    /// concurrent calls. Generic over the fetcher so the page source can be
    /// replaced (recorded pages, a local mirror, tests).
    pub struct CommentExtractor<F = HttpFetcher> {
        fetcher: F,
        base_url: String,
    }

    impl CommentExtractor<HttpFetcher> {
        /// Builds an extractor over a fresh HTTP client configured from `config`.
        ///
        /// # Errors
        ///
        /// Returns `InitializationError::HttpClientError` if the client cannot
        /// be built.
        pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
            let client = init_client(config)?;
            Ok(Self::with_fetcher(
                HttpFetcher::new(client, config),
                config.base_url_trimmed(),
            ))
        }
    }

    impl<F: DocumentFetcher> CommentExtractor<F> {
        /// Builds an extractor over any [`DocumentFetcher`].
        pub fn with_fetcher(fetcher: F, base_url: impl Into<String>) -> Self {
            let base_url: String = base_url.into();
            Self {
                fetcher,
                base_url: base_url.trim_end_matches('/').to_string(),
            }
        }

        /// Returns up to `limit` comments of the post at `url`, most liked first.
        ///
        /// Comments with equal like counts keep the order they appear on the page.
        ///
        /// # Errors
        ///
        /// - `ExtractionError::InvalidUrl` if no post id can be read from `url`
        ///   (no request is made)
        /// - `ExtractionError::FetchFailed` if neither page URL serves the post,
        ///   or a request times out
        /// - `ExtractionError::NoCommentsFound` if the page yields no comment
        /// - `ExtractionError::Transport` for other network-level failures
        /// - `ExtractionError::Internal` if page parsing aborts unexpectedly
        pub async fn extract_top_comments(&self, url: &str, limit: usize) -> ExtractionResult {
            let post_id = extract_post_id(url)?;

            let document = fetch_post_document(&self.fetcher, &self.base_url, &post_id).await?;

            // Parsing is CPU-bound and scraper's Html is !Send
            let base_url = self.base_url.clone();
            let body = document.body;
            let comments = tokio::task::spawn_blocking(move || {
                let stats = ExtractionStats::new();
                let comments = crate::parse::extract_comments(&body, &base_url, &stats);
                stats.log_summary();
                comments
            })
            .await
            .map_err(|e| ExtractionError::Internal(format!("page parsing aborted: {e}")))?;

            info!(
                "Found {} comment(s) on {} for post {}",
                comments.len(),
                document.url,
                post_id
            );
            rank_comments(comments, limit)
        }
    }

    /// Returns up to `limit` comments of the post at `url`, using default
    /// settings.
    ///
    /// Builds a new HTTP client per call. Use [`CommentExtractor`] to reuse
    /// one client across calls or to change the configuration.
    ///
    /// # Errors
    ///
    /// Same as [`CommentExtractor::extract_top_comments`]. A client that
    /// cannot be built surfaces as `ExtractionError::Internal`.
    pub async fn extract_top_comments(url: &str, limit: usize) -> ExtractionResult {
        let extractor = CommentExtractor::from_config(&Config::default())
            .map_err(|e| ExtractionError::Internal(e.to_string()))?;
        extractor.extract_top_comments(url, limit).await
    }

}
