//! Tests for rendering and writing extraction results.

use top_comments::export::{error_json, format_text, to_json, write_output};
use top_comments::{CommentRecord, ExtractionError};

fn sample() -> Vec<CommentRecord> {
    vec![
        CommentRecord {
            author: "@alice".to_string(),
            text: "Loved this".to_string(),
            likes: 1200,
            timestamp: "2 days ago".to_string(),
            comment_url: "https://www.youtube.com/comment/A1".to_string(),
            comment_id: "A1".to_string(),
        },
        CommentRecord {
            author: "@bob".to_string(),
            text: "Same".to_string(),
            likes: 4,
            timestamp: String::new(),
            comment_url: String::new(),
            comment_id: String::new(),
        },
    ]
}

#[test]
fn test_text_listing_written_to_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("top.txt");

    write_output(&format_text(&sample()), Some(&path)).expect("write should succeed");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Top 2 Most Liked Comments:\n\n1. @alice:\n"));
    assert!(written.contains("   👍 1200 likes\n"));
    assert!(written.contains("2. @bob:\n   Same\n   👍 4 likes\n"));
    assert_eq!(written.matches(&"-".repeat(50)).count(), 2);
}

#[test]
fn test_json_document_written_to_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("top.json");

    write_output(&to_json(&sample()), Some(&path)).expect("write should succeed");

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["count"], 2);
    assert_eq!(value["comments"][1]["author"], "@bob");
    let records: Vec<CommentRecord> =
        serde_json::from_value(value["comments"].clone()).unwrap();
    assert_eq!(records, sample());
}

#[test]
fn test_error_document() {
    let value: serde_json::Value =
        serde_json::from_str(&error_json(&ExtractionError::InvalidUrl)).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["kind"], "invalid_url");
    assert_eq!(
        value["error"],
        "Invalid YouTube Community URL. Please check the URL format."
    );
}
