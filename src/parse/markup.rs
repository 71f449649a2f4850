//! Comment extraction from rendered comment markup.
//!
//! Used when the page carries no usable data blob. Each comment container is
//! read independently: a container that cannot be read is skipped and the
//! scan continues.

use std::sync::LazyLock;

use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::config::{
    AUTHOR_SELECTOR_STR, COMMENT_CONTAINER_SELECTOR_STR, COMMENT_ID_PREFIX, CONTENT_SELECTOR_STR,
    PUBLISHED_TIME_SELECTOR_STR, UNKNOWN_AUTHOR, VOTE_COUNT_SELECTOR_STR,
};
use crate::error_handling::{ExtractionStats, SkipReason};
use crate::models::CommentRecord;

use super::compile_selector;
use super::likes::parse_markup_like_count;

static CONTAINER_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| compile_selector(COMMENT_CONTAINER_SELECTOR_STR, "comment containers"));
static AUTHOR_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| compile_selector(AUTHOR_SELECTOR_STR, "comment author"));
static CONTENT_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| compile_selector(CONTENT_SELECTOR_STR, "comment body"));
static VOTE_COUNT_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| compile_selector(VOTE_COUNT_SELECTOR_STR, "comment vote count"));
static PUBLISHED_TIME_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| compile_selector(PUBLISHED_TIME_SELECTOR_STR, "comment publish time"));

/// Extracts a record from every readable comment container in `document`.
///
/// Missing parts degrade: no author link gives `"Unknown"`, no vote count
/// gives 0, no timestamp gives an empty string. Containers without body text
/// or with a malformed like count are skipped and counted in `stats`.
pub fn extract_markup_comments(
    document: &Html,
    base_url: &str,
    stats: &ExtractionStats,
) -> Vec<CommentRecord> {
    let Some(selector) = CONTAINER_SELECTOR.as_ref() else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for element in document.select(selector) {
        match read_comment_element(element, base_url) {
            Ok(record) => records.push(record),
            Err(reason) => {
                debug!(
                    "Skipping comment element '{}': {}",
                    element.value().id().unwrap_or_default(),
                    reason
                );
                stats.record_skip(reason);
            }
        }
    }
    records
}

fn read_comment_element(
    element: ElementRef<'_>,
    base_url: &str,
) -> Result<CommentRecord, SkipReason> {
    let author =
        first_text(element, &AUTHOR_SELECTOR).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
    let text = first_text(element, &CONTENT_SELECTOR).unwrap_or_default();
    let likes_text =
        first_text(element, &VOTE_COUNT_SELECTOR).unwrap_or_else(|| "0".to_string());
    let likes = parse_markup_like_count(&likes_text).map_err(|e| {
        debug!("{}", e);
        SkipReason::MalformedLikeCount
    })?;
    let timestamp = first_text(element, &PUBLISHED_TIME_SELECTOR).unwrap_or_default();
    let comment_id = element
        .value()
        .id()
        .unwrap_or_default()
        .replace(COMMENT_ID_PREFIX, "");

    if text.is_empty() {
        return Err(SkipReason::EmptyText);
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

/// Trimmed text of the first descendant matching `selector`, if any.
fn first_text(element: ElementRef<'_>, selector: &LazyLock<Option<Selector>>) -> Option<String> {
    let selector = selector.as_ref()?;
    element
        .select(selector)
        .next()
        .map(|found| found.text().collect::<String>().trim().to_string())
}
