//! JSON rendering of extraction results.

use serde::Serialize;

use crate::error_handling::ExtractionError;
use crate::models::CommentRecord;

#[derive(Serialize)]
struct CommentListing<'a> {
    success: bool,
    comments: &'a [CommentRecord],
    count: usize,
}

#[derive(Serialize)]
struct FailureReport<'a> {
    success: bool,
    kind: &'a str,
    error: String,
}

/// Renders `{"success": true, "comments": [...], "count": n}`.
pub fn to_json(comments: &[CommentRecord]) -> String {
    let listing = CommentListing {
        success: true,
        comments,
        count: comments.len(),
    };
    serde_json::to_string_pretty(&listing).unwrap_or_else(|_| "{}".to_string())
}

/// Renders `{"success": false, "kind": "...", "error": "..."}`.
pub fn error_json(error: &ExtractionError) -> String {
    let report = FailureReport {
        success: false,
        kind: error.kind().as_str(),
        error: error.to_string(),
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_to_json_shape() {
        let comments = vec![CommentRecord {
            author: "@alice".to_string(),
            text: "hi".to_string(),
            likes: 5,
            timestamp: "now".to_string(),
            comment_url: String::new(),
            comment_id: String::new(),
        }];
        let value: Value = serde_json::from_str(&to_json(&comments)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["count"], 1);
        assert_eq!(value["comments"][0]["author"], "@alice");
        assert_eq!(value["comments"][0]["likes"], 5);
    }

    #[test]
    fn test_error_json_shape() {
        let value: Value =
            serde_json::from_str(&error_json(&ExtractionError::NoCommentsFound)).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["kind"], "no_comments_found");
        assert!(value["error"]
            .as_str()
            .unwrap()
            .starts_with("No comments found"));
    }
}
