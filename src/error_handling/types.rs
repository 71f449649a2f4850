//! Error type definitions.
//!
//! This module defines the terminal extraction errors, the transport error
//! reported by document fetchers, and the per-node skip reasons recovered
//! locally during parsing.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Network-level failure reported by a document fetcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    /// Underlying transport message (DNS, connection refusal, timeout, ...)
    pub message: String,
    /// Whether the request exceeded its timeout
    pub timed_out: bool,
}

impl TransportError {
    /// A non-timeout transport failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }

    /// A request that exceeded its timeout.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: true,
        }
    }
}

impl From<ReqwestError> for TransportError {
    fn from(error: ReqwestError) -> Self {
        if error.is_timeout() {
            TransportError::timeout(error.to_string())
        } else {
            TransportError::new(error.to_string())
        }
    }
}

/// Terminal failure of one extraction request.
///
/// None of these are retried. The `Display` text is the human-readable reason
/// surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No identifier pattern matched the input URL.
    #[error("Invalid YouTube Community URL. Please check the URL format.")]
    InvalidUrl,

    /// Both the primary and the fallback page failed, or a fetch timed out.
    #[error("Failed to fetch community post. Check the URL.")]
    FetchFailed {
        /// Detail for logs: last status seen or the timeout message
        reason: String,
    },

    /// The page was fetched but neither extraction path produced a record.
    #[error("No comments found. The post might not have comments or the format has changed.")]
    NoCommentsFound,

    /// Network-level failure propagated from the document fetcher.
    #[error("Error fetching comments: {0}")]
    Transport(String),

    /// Unexpected failure converted at the pipeline boundary.
    #[error("An error occurred: {0}")]
    Internal(String),
}

/// Kind of an [`ExtractionError`], for callers that branch on the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// See [`ExtractionError::InvalidUrl`]
    InvalidUrl,
    /// See [`ExtractionError::FetchFailed`]
    FetchFailed,
    /// See [`ExtractionError::NoCommentsFound`]
    NoCommentsFound,
    /// See [`ExtractionError::Transport`]
    Transport,
    /// See [`ExtractionError::Internal`]
    Internal,
}

impl FailureKind {
    /// Stable snake_case label, used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidUrl => "invalid_url",
            FailureKind::FetchFailed => "fetch_failed",
            FailureKind::NoCommentsFound => "no_comments_found",
            FailureKind::Transport => "transport_error",
            FailureKind::Internal => "internal_error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ExtractionError {
    /// Kind of this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            ExtractionError::InvalidUrl => FailureKind::InvalidUrl,
            ExtractionError::FetchFailed { .. } => FailureKind::FetchFailed,
            ExtractionError::NoCommentsFound => FailureKind::NoCommentsFound,
            ExtractionError::Transport(_) => FailureKind::Transport,
            ExtractionError::Internal(_) => FailureKind::Internal,
        }
    }

    /// True when the page was read fine and simply had nothing to rank.
    ///
    /// Callers that prefer an empty listing over an error can map this case
    /// to `Ok(Vec::new())`.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, ExtractionError::NoCommentsFound)
    }
}

impl From<TransportError> for ExtractionError {
    fn from(error: TransportError) -> Self {
        if error.timed_out {
            ExtractionError::FetchFailed {
                reason: format!("request timed out: {}", error.message),
            }
        } else {
            ExtractionError::Transport(error.message)
        }
    }
}

/// Reasons a candidate node or element was skipped without failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// A marked script block had no assignment to the data variable.
    BlobAssignmentMissing,
    /// A captured data blob did not decode as JSON.
    MalformedJsonBlob,
    /// A comment thread node had no comment renderer below it.
    MissingCommentRenderer,
    /// A structured record had an empty author.
    EmptyAuthor,
    /// A record had an empty body.
    EmptyText,
    /// A fallback element carried a like count that failed to parse.
    MalformedLikeCount,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::BlobAssignmentMissing => "Data blob assignment missing",
            SkipReason::MalformedJsonBlob => "Malformed JSON blob",
            SkipReason::MissingCommentRenderer => "Missing comment renderer",
            SkipReason::EmptyAuthor => "Empty author",
            SkipReason::EmptyText => "Empty text",
            SkipReason::MalformedLikeCount => "Malformed like count",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
