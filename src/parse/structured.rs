//! Embedded data blob location.
//!
//! Post pages assign their initial data to a global variable inside an inline
//! `<script>`. Only scripts mentioning comment threads are considered, and
//! the object is captured textually between the assignment and the first
//! terminating `};` rather than by parsing the script.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::config::{COMMENT_THREAD_MARKER, INITIAL_DATA_VARIABLE};
use crate::error_handling::{ExtractionStats, SkipReason};

static SCRIPT_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| super::compile_selector("script", "script blocks"));

/// Assignment forms of the data variable, tried in order per script.
/// Capture group 1 is the object literal up to and including the `}` before `;`.
static BLOB_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let var = regex::escape(INITIAL_DATA_VARIABLE);
    [
        format!(r"(?s){var}\s*=\s*(\{{.+?\}});"),
        format!(r#"(?s)window\[\s*["']{var}["']\s*\]\s*=\s*(\{{.+?\}});"#),
    ]
    .iter()
    .filter_map(|pattern| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("Failed to compile data blob pattern '{}': {}", pattern, e);
            None
        }
    })
    .collect()
});

/// Finds and decodes every embedded data blob that carries comment threads.
///
/// Scripts are visited in document order. A script without an assignment, or
/// whose captured object does not decode, is skipped and counted in `stats`.
pub fn locate_data_blobs(document: &Html, stats: &ExtractionStats) -> Vec<Value> {
    let Some(selector) = SCRIPT_SELECTOR.as_ref() else {
        return Vec::new();
    };

    let mut blobs = Vec::new();
    for (index, script) in document.select(selector).enumerate() {
        let source: String = script.text().collect();
        if !source.contains(COMMENT_THREAD_MARKER) {
            continue;
        }

        match decode_blob(&source) {
            Ok(value) => {
                debug!("Decoded data blob from script #{}", index);
                blobs.push(value);
            }
            Err(reason) => {
                debug!("Skipping script #{}: {}", index, reason);
                stats.record_skip(reason);
            }
        }
    }
    blobs
}

/// Captures and decodes the data object assigned in one script.
fn decode_blob(source: &str) -> Result<Value, SkipReason> {
    let capture = BLOB_PATTERNS
        .iter()
        .find_map(|re| re.captures(source).and_then(|caps| caps.get(1)))
        .ok_or(SkipReason::BlobAssignmentMissing)?;

    if let Ok(value) = serde_json::from_str::<Value>(capture.as_str()) {
        return Ok(value);
    }

    // The lazy capture stops at the first `};`, which may sit inside a string
    let balanced =
        balanced_object(source, capture.start()).ok_or(SkipReason::MalformedJsonBlob)?;
    serde_json::from_str::<Value>(balanced).map_err(|e| {
        debug!("Data blob is not valid JSON: {}", e);
        SkipReason::MalformedJsonBlob
    })
}

/// Returns the object literal starting at `start` (a `{`), matching braces
/// outside of string literals.
fn balanced_object(source: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_str = false;
    let mut escape = false;
    for (offset, ch) in source.get(start..)?.char_indices() {
        if in_str {
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_str = false;
            }
            continue;
        }
        match ch {
            '"' => in_str = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return source.get(start..start + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(scripts: &[&str]) -> Html {
        let body: String = scripts
            .iter()
            .map(|s| format!("<script>{s}</script>"))
            .collect();
        Html::parse_document(&format!("<html><head></head><body>{body}</body></html>"))
    }

    #[test]
    fn test_var_assignment_decoded() {
        let doc = page(&[
            r#"var ytInitialData = {"contents":{"commentThreadsRenderer":{}}};"#,
        ]);
        let stats = ExtractionStats::new();
        let blobs = locate_data_blobs(&doc, &stats);
        assert_eq!(blobs.len(), 1);
        assert!(blobs[0]["contents"]["commentThreadsRenderer"].is_object());
    }

    #[test]
    fn test_window_assignment_decoded() {
        let doc = page(&[
            r#"window["ytInitialData"] = {"commentThreadsRenderer": {"a": 1}};"#,
        ]);
        let blobs = locate_data_blobs(&doc, &ExtractionStats::new());
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0]["commentThreadsRenderer"]["a"], 1);
    }

    #[test]
    fn test_scripts_without_marker_ignored() {
        let doc = page(&[r#"var ytInitialData = {"other": true};"#]);
        let stats = ExtractionStats::new();
        assert!(locate_data_blobs(&doc, &stats).is_empty());
        assert_eq!(stats.total_skipped(), 0);
    }

    #[test]
    fn test_marker_without_assignment_counted() {
        let doc = page(&[r#"console.log("commentThreadsRenderer");"#]);
        let stats = ExtractionStats::new();
        assert!(locate_data_blobs(&doc, &stats).is_empty());
        assert_eq!(stats.skip_count(SkipReason::BlobAssignmentMissing), 1);
    }

    #[test]
    fn test_malformed_blob_skipped_and_next_kept() {
        let doc = page(&[
            r#"var ytInitialData = {"commentThreadsRenderer": oops};"#,
            r#"var ytInitialData = {"commentThreadsRenderer": {"ok": true}};"#,
        ]);
        let stats = ExtractionStats::new();
        let blobs = locate_data_blobs(&doc, &stats);
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0]["commentThreadsRenderer"]["ok"], true);
        assert_eq!(stats.skip_count(SkipReason::MalformedJsonBlob), 1);
    }

    #[test]
    fn test_terminator_inside_string_recovered() {
        let doc = page(&[
            r#"var ytInitialData = {"commentThreadsRenderer": {"text": "a};b"}}; var other = 1;"#,
        ]);
        let blobs = locate_data_blobs(&doc, &ExtractionStats::new());
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0]["commentThreadsRenderer"]["text"], "a};b");
    }

    #[test]
    fn test_multiple_blobs_kept_in_document_order() {
        let doc = page(&[
            r#"var ytInitialData = {"commentThreadsRenderer": {"n": 1}};"#,
            r#"var ytInitialData = {"commentThreadsRenderer": {"n": 2}};"#,
        ]);
        let blobs = locate_data_blobs(&doc, &ExtractionStats::new());
        assert_eq!(blobs.len(), 2);
        assert_eq!(blobs[0]["commentThreadsRenderer"]["n"], 1);
        assert_eq!(blobs[1]["commentThreadsRenderer"]["n"], 2);
    }

    #[test]
    fn test_balanced_object() {
        let src = r#"x = {"a": {"b": "}"}, "c": 1}; rest"#;
        let start = src.find('{').unwrap();
        assert_eq!(
            balanced_object(src, start),
            Some(r#"{"a": {"b": "}"}, "c": 1}"#)
        );
        assert_eq!(balanced_object("{unterminated", 0), None);
    }
}
