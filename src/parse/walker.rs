//! Comment search over decoded page data.
//!
//! The data blob has no fixed schema. Every object and array is visited, and
//! any object holding a comment-thread key is projected into a record. Matches
//! can nest, so descent continues below a match.

use serde_json::Value;

use crate::config::COMMENT_THREAD_MARKER;
use crate::error_handling::{ExtractionStats, SkipReason};
use crate::models::CommentRecord;

use super::likes::normalize_like_count;

/// Collects a record for every comment thread found anywhere in `root`.
///
/// Records appear in depth-first discovery order. Threads with an empty
/// author or empty text are dropped and counted in `stats`.
pub fn collect_comment_records(
    root: &Value,
    base_url: &str,
    stats: &ExtractionStats,
) -> Vec<CommentRecord> {
    let mut records = Vec::new();
    walk(root, base_url, stats, &mut records);
    records
}

fn walk(node: &Value, base_url: &str, stats: &ExtractionStats, out: &mut Vec<CommentRecord>) {
    match node {
        Value::Object(map) => {
            if let Some(thread) = map.get(COMMENT_THREAD_MARKER) {
                match project_thread(thread, base_url) {
                    Ok(record) => out.push(record),
                    Err(reason) => stats.record_skip(reason),
                }
            }
            for child in map.values() {
                walk(child, base_url, stats, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, base_url, stats, out);
            }
        }
        _ => {}
    }
}

/// Reads one comment from a thread node at `comment.commentRenderer`.
fn project_thread(thread: &Value, base_url: &str) -> Result<CommentRecord, SkipReason> {
    let renderer = thread
        .pointer("/comment/commentRenderer")
        .filter(|r| r.is_object())
        .ok_or(SkipReason::MissingCommentRenderer)?;

    let text: String = renderer
        .pointer("/contentText/runs")
        .and_then(Value::as_array)
        .map(|runs| {
            runs.iter()
                .filter_map(|run| run.get("text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();
    let author = string_at(renderer, "/authorText/simpleText");
    let likes = renderer
        .pointer("/voteCount/simpleText")
        .and_then(Value::as_str)
        .map_or(0, normalize_like_count);
    let comment_id = string_at(renderer, "/commentId");
    let timestamp = string_at(renderer, "/publishedTimeText/runs/0/text");

    if text.is_empty() {
        return Err(SkipReason::EmptyText);
    }
    if author.is_empty() {
        return Err(SkipReason::EmptyAuthor);
    }

    Ok(CommentRecord {
        comment_url: CommentRecord::comment_url_for(base_url, &comment_id),
        author,
        text,
        likes,
        timestamp,
        comment_id,
    })
}

fn string_at(value: &Value, pointer: &str) -> String {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
