//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `top_comments` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use top_comments::config::{
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use top_comments::export::{error_json, format_text, to_json, write_output};
use top_comments::initialization::init_logger_with;
use top_comments::{CommentExtractor, Config, LogFormat, LogLevel, OutputFormat};

/// Exit code for an extraction that ended in an error.
const EXIT_EXTRACTION_FAILED: i32 = 1;
/// Exit code for arguments that fail validation.
const EXIT_INVALID_CONFIG: i32 = 2;

/// Print the most-liked comments of a community post.
#[derive(Debug, Parser)]
#[command(name = "top_comments", version, about)]
struct Cli {
    /// Community post URL, e.g. https://www.youtube.com/post/Ugkx...
    url: String,

    /// Maximum number of comments to print
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// HTTP Accept-Language header value
    #[arg(long, default_value = DEFAULT_ACCEPT_LANGUAGE)]
    accept_language: String,

    /// Site the post pages are fetched from
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the listing to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            limit: self.limit,
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            accept_language: self.accept_language.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            output_format: self.format.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.to_config();

    if let Err(e) = config.validate() {
        eprintln!("top_comments error: {e}");
        process::exit(EXIT_INVALID_CONFIG);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let extractor =
        CommentExtractor::from_config(&config).context("Failed to initialize HTTP client")?;

    match extractor.extract_top_comments(&cli.url, config.limit).await {
        Ok(comments) => {
            let rendered = match config.output_format {
                OutputFormat::Text => format_text(&comments),
                OutputFormat::Json => to_json(&comments),
            };
            write_output(&rendered, cli.output.as_deref())?;
            Ok(())
        }
        Err(e) => {
            log::debug!("Extraction failed ({}): {:?}", e.kind(), e);
            match config.output_format {
                OutputFormat::Text => eprintln!("top_comments error: {e}"),
                OutputFormat::Json => eprintln!("{}", error_json(&e)),
            }
            process::exit(EXIT_EXTRACTION_FAILED)
        }
    }
}
