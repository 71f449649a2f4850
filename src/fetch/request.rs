//! HTTP request building.
//!
//! This module provides the realistic browser header set applied to every
//! page request.

/// Realistic browser request headers.
///
/// The site serves a reduced page without the embedded data blob when the
/// request does not look like it came from a browser. The User-Agent itself
/// is set on the client; everything else is applied per request.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    const ACCEPT: &'static str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
        accept_language: &str,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, Self::ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, accept_language)
            .header(reqwest::header::REFERER, "https://www.google.com/")
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-dest"),
                "document",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-mode"),
                "navigate",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-site"),
                "none",
            )
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}
