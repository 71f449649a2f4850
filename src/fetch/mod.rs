//! Post page fetching.
//!
//! This module provides:
//! - The `DocumentFetcher` boundary and its `reqwest` implementation
//! - Realistic browser request headers
//! - Primary/fallback URL selection for a post

mod document;
mod request;

pub use document::{fetch_post_document, DocumentFetcher, FetchedDocument, HttpFetcher};

#[cfg(test)]
pub(crate) use document::tests::StubFetcher;
