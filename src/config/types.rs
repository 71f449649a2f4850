//! Configuration types and validation.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, MAX_LIMIT, MAX_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the ranked comment listing written by the binary.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered plain-text listing
    Text,
    /// JSON document with `success`, `comments` and `count`
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use top_comments::Config;
///
/// let config = Config {
///     limit: 10,
///     timeout_seconds: 20,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Site the post pages are fetched from
    pub base_url: String,

    /// Maximum number of comments returned
    pub limit: usize,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// HTTP Accept-Language header value
    pub accept_language: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Output format of the binary
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Text,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Config {
    /// Checks every field against its accepted range.
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.limit == 0 {
            return Err(ConfigValidationError::new(
                "limit",
                "must be greater than 0",
            ));
        }
        if self.limit > MAX_LIMIT {
            return Err(ConfigValidationError::new(
                "limit",
                format!("must be at most {MAX_LIMIT}"),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0",
            ));
        }
        if self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                format!("must be at most {MAX_TIMEOUT_SECS} seconds"),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "user_agent",
                "must not be empty",
            ));
        }
        match url::Url::parse(&self.base_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {}
            _ => {
                return Err(ConfigValidationError::new(
                    "base_url",
                    format!(
                        "'{}' is not an absolute http(s) URL, e.g. https://www.youtube.com",
                        self.base_url
                    ),
                ))
            }
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
