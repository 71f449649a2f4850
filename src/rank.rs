//! Ranking and limiting of extracted comments.

use crate::error_handling::ExtractionError;
use crate::models::CommentRecord;

/// Sorts comments by likes, most liked first, and keeps at most `limit`.
///
/// The sort is stable: comments with equal likes keep their discovery order.
///
/// # Errors
///
/// Returns `ExtractionError::NoCommentsFound` if `comments` is empty. The
/// check happens before truncation, so `limit == 0` with comments present is
/// an empty success.
pub fn rank_comments(
    mut comments: Vec<CommentRecord>,
    limit: usize,
) -> Result<Vec<CommentRecord>, ExtractionError> {
    if comments.is_empty() {
        return Err(ExtractionError::NoCommentsFound);
    }
    comments.sort_by(|a, b| b.likes.cmp(&a.likes));
    comments.truncate(limit);
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str, likes: u64) -> CommentRecord {
        CommentRecord {
            author: author.to_string(),
            text: format!("comment by {author}"),
            likes,
            timestamp: String::new(),
            comment_url: String::new(),
            comment_id: String::new(),
        }
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let ranked = rank_comments(
            vec![record("a", 3), record("b", 50), record("c", 50), record("d", 1)],
            50,
        )
        .unwrap();
        let order: Vec<_> = ranked.iter().map(|r| (r.author.as_str(), r.likes)).collect();
        assert_eq!(order, [("b", 50), ("c", 50), ("a", 3), ("d", 1)]);
    }

    #[test]
    fn test_limit_keeps_most_liked() {
        let comments: Vec<_> = (0..80u64).map(|i| record(&format!("u{i}"), i)).collect();
        let ranked = rank_comments(comments, 50).unwrap();
        assert_eq!(ranked.len(), 50);
        assert_eq!(ranked[0].likes, 79);
        assert_eq!(ranked[49].likes, 30);
        assert!(ranked.iter().all(|r| r.likes >= 30));
    }

    #[test]
    fn test_limit_larger_than_input() {
        let ranked = rank_comments(vec![record("a", 1), record("b", 2)], 50).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_empty_is_no_comments_found() {
        assert_eq!(
            rank_comments(Vec::new(), 50),
            Err(ExtractionError::NoCommentsFound)
        );
    }

    #[test]
    fn test_zero_limit_with_comments_is_empty_success() {
        assert_eq!(rank_comments(vec![record("a", 1)], 0), Ok(Vec::new()));
    }
}
