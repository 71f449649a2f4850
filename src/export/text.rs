//! Numbered plain-text listing.

use std::fmt::Write;

use crate::config::EXPORT_RULE_WIDTH;
use crate::models::CommentRecord;

/// Renders comments as a numbered listing, one block per comment.
///
/// ```text
/// Top 2 Most Liked Comments:
///
/// 1. @alice:
///    First!
///    👍 1200 likes
///    📅 2 days ago
///    🔗 https://www.youtube.com/comment/Ugx1
/// --------------------------------------------------
/// ```
pub fn format_text(comments: &[CommentRecord]) -> String {
    let rule = "-".repeat(EXPORT_RULE_WIDTH);
    let mut out = format!("Top {} Most Liked Comments:\n\n", comments.len());
    for (i, comment) in comments.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "{}. {}:\n   {}\n   👍 {} likes\n   📅 {}\n   🔗 {}\n{}\n",
            i + 1,
            comment.author,
            comment.text,
            comment.likes,
            comment.timestamp,
            comment.comment_url,
            rule
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str, likes: u64) -> CommentRecord {
        CommentRecord {
            author: author.to_string(),
            text: "First!".to_string(),
            likes,
            timestamp: "2 days ago".to_string(),
            comment_url: "https://www.youtube.com/comment/Ugx1".to_string(),
            comment_id: "Ugx1".to_string(),
        }
    }

    #[test]
    fn test_format_text_blocks() {
        let text = format_text(&[record("@alice", 1200), record("@bob", 3)]);
        let rule = "-".repeat(50);
        let expected = format!(
            "Top 2 Most Liked Comments:\n\n\
             1. @alice:\n   First!\n   👍 1200 likes\n   📅 2 days ago\n   🔗 https://www.youtube.com/comment/Ugx1\n{rule}\n\
             2. @bob:\n   First!\n   👍 3 likes\n   📅 2 days ago\n   🔗 https://www.youtube.com/comment/Ugx1\n{rule}\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_text_empty() {
        assert_eq!(format_text(&[]), "Top 0 Most Liked Comments:\n\n");
    }
}
