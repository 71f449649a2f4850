//! Post identifier extraction from user-supplied URLs.

use std::fmt;
use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ExtractionError;

/// Accepted URL shapes, tried in order. The first capture group is the id.
const POST_ID_PATTERN_STRS: &[&str] = &[
    r"post/([A-Za-z0-9_-]+)",
    r"community\?lb=([A-Za-z0-9_-]+)",
    r"community/post/([A-Za-z0-9_-]+)",
];

static POST_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    POST_ID_PATTERN_STRS
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                log::error!("Failed to compile post id pattern '{}': {}", pattern, e);
                None
            }
        })
        .collect()
});

/// Canonical identifier of a community post.
///
/// Only ASCII letters, digits, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the post identifier from any accepted URL shape.
///
/// Accepted shapes, tried in this order:
/// 1. `.../post/<id>`
/// 2. `.../community?lb=<id>`
/// 3. `.../community/post/<id>`
///
/// The length cap is checked first: input longer than `MAX_URL_LENGTH` is
/// rejected even when one of the shapes would match it.
///
/// # Errors
///
/// Returns `ExtractionError::InvalidUrl` if no pattern matches or the input
/// exceeds `MAX_URL_LENGTH`.
pub fn extract_post_id(url: &str) -> Result<PostId, ExtractionError> {
    let url = url.trim();
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        );
        return Err(ExtractionError::InvalidUrl);
    }

    for pattern in POST_ID_PATTERNS.iter() {
        if let Some(id) = pattern.captures(url).and_then(|caps| caps.get(1)) {
            debug!("Extracted post id '{}' from {}", id.as_str(), url);
            return Ok(PostId(id.as_str().to_string()));
        }
    }

    warn!("No post id pattern matched URL: {url}");
    Err(ExtractionError::InvalidUrl)
}
