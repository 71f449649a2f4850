//! Configuration constants.
//!
//! This module defines the constants used throughout the application:
//! defaults, page markers of the source site, markup selectors and
//! output formatting widths.

/// Site that serves community posts.
pub const DEFAULT_BASE_URL: &str = "https://www.youtube.com";

/// Number of comments returned when the caller does not choose a bound.
pub const DEFAULT_LIMIT: usize = 50;
/// Upper bound accepted by configuration validation.
pub const MAX_LIMIT: usize = 1000;

/// Per-request timeout in seconds.
/// A fetch that exceeds this surfaces as a failed fetch instead of hanging.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// Upper bound accepted by configuration validation.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a modern Chrome browser on Windows. The source site serves a
/// stripped page without the embedded data blob to unknown agents.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header value.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Maximum input URL length (2048 characters).
/// Longer input is rejected as an invalid URL before any pattern matching.
pub const MAX_URL_LENGTH: usize = 2048;

// Structured data markers
/// Substring that marks a script block as carrying comment-thread data.
pub const COMMENT_THREAD_MARKER: &str = "commentThreadsRenderer";
/// Global variable the page assigns its initial data blob to.
pub const INITIAL_DATA_VARIABLE: &str = "ytInitialData";

// Markup fallback selectors
/// Comment containers: `div` elements whose id starts with `comment-`.
pub const COMMENT_CONTAINER_SELECTOR_STR: &str = r#"div[id^="comment-"]"#;
/// Id prefix stripped from a container id to recover the comment id.
pub const COMMENT_ID_PREFIX: &str = "comment-";
/// Author link inside a comment container.
pub const AUTHOR_SELECTOR_STR: &str = "a#author-text";
/// Comment body inside a comment container.
pub const CONTENT_SELECTOR_STR: &str = "div#content-text";
/// Like count: `span` elements whose id starts with `vote-count-`.
pub const VOTE_COUNT_SELECTOR_STR: &str = r#"span[id^="vote-count-"]"#;
/// Relative publish time.
pub const PUBLISHED_TIME_SELECTOR_STR: &str = "yt-formatted-string.published-time-text";

/// Author substituted when a fallback container has no author link.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Width of the rule line separating records in the text export.
pub const EXPORT_RULE_WIDTH: usize = 50;
