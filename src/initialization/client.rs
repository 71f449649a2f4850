//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Maximum number of redirect hops followed for one page.
const MAX_REDIRECT_HOPS: usize = 10;

/// Initializes the HTTP client shared by every extraction.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Total request timeout from the configuration
/// - Redirect following (up to 10 hops)
/// - Rustls TLS backend (no native TLS)
///
/// The client pools connections and is safe to share across concurrent
/// extractions.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}
