//! Data model for extracted comments.

use serde::{Deserialize, Serialize};

/// One comment as presented on the post page, normalized.
///
/// Records live only for the duration of one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Display name of the author
    pub author: String,
    /// Comment body, text runs joined without separator
    pub text: String,
    /// Like count after normalization of abbreviated forms ("1.2K")
    pub likes: u64,
    /// Relative publish time as shown by the site ("2 days ago"), may be empty
    pub timestamp: String,
    /// Deep link to the comment, empty when no id was recovered
    pub comment_url: String,
    /// Raw comment identifier, may be empty
    pub comment_id: String,
}

impl CommentRecord {
    /// Builds the deep link for `comment_id` under `base_url`.
    ///
    /// Returns an empty string when the id is empty.
    pub fn comment_url_for(base_url: &str, comment_id: &str) -> String {
        if comment_id.is_empty() {
            String::new()
        } else {
            format!("{}/comment/{}", base_url.trim_end_matches('/'), comment_id)
        }
    }
}
