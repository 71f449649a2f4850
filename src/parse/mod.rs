//! HTML parsing and comment extraction.
//!
//! This module extracts comment records from a fetched post page:
//! - Embedded data blobs (`ytInitialData`) searched for comment threads
//! - Rendered comment markup, when no blob yields a comment
//! - Like-count normalization shared by both paths
//!
//! All markup access is done using CSS selectors via the `scraper` crate.

mod likes;
mod markup;
mod structured;
mod walker;

use log::{debug, info};
use scraper::{Html, Selector};

use crate::error_handling::ExtractionStats;
use crate::models::CommentRecord;

use markup::extract_markup_comments;
use structured::locate_data_blobs;
use walker::collect_comment_records;

/// Extracts every qualifying comment from a post page, unranked.
///
/// Comments from all decoded data blobs are concatenated in document order,
/// without deduplication. The markup scan runs only when that yields nothing.
pub fn extract_comments(html: &str, base_url: &str, stats: &ExtractionStats) -> Vec<CommentRecord> {
    let document = Html::parse_document(html);

    let blobs = locate_data_blobs(&document, stats);
    let comments: Vec<CommentRecord> = blobs
        .iter()
        .flat_map(|blob| collect_comment_records(blob, base_url, stats))
        .collect();
    debug!(
        "Structured data yielded {} comment(s) from {} blob(s)",
        comments.len(),
        blobs.len()
    );
    if !comments.is_empty() {
        return comments;
    }

    info!("No comments in structured data, scanning comment markup");
    let comments = extract_markup_comments(&document, base_url, stats);
    debug!("Comment markup yielded {} comment(s)", comments.len());
    comments
}

/// Parses a static CSS selector, logging instead of panicking on failure.
///
/// A `None` selector matches nothing.
pub(crate) fn compile_selector(selector_str: &str, context: &str) -> Option<Selector> {
    match Selector::parse(selector_str) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::error!(
                "Failed to parse CSS selector '{}' for {}: {}",
                selector_str,
                context,
                e
            );
            None
        }
    }
}
