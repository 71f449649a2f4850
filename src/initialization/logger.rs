//! Logger initialization.
//!
//! Log lines go to stderr so that a comment listing written to stdout stays
//! clean when piped.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Dependencies that log page parsing or connection details far below the
/// level of a single extraction, with the most verbose level kept for each.
const NOISY_MODULES: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

/// Installs the process-wide logger.
///
/// `level` applies to this crate and is the default for everything else;
/// `RUST_LOG` can still raise or lower individual modules. Parser and HTTP
/// internals are capped by a fixed table so `--log-level debug` shows the
/// extraction steps (blobs found, fallback taken, skipped candidates) and not
/// every tokenizer event.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=top_comments=debug,reqwest=info top_comments https://www.youtube.com/post/Ugkx...
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, cap) in NOISY_MODULES {
        builder.filter_module(module, *cap);
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    level_label(record.level()),
                    record.args()
                )
            });
        }
    }

    // A second installation in the same process (tests) is reported, not fatal
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON object per record: `ts` (epoch millis), `level`, `target`, `msg`.
fn json_line(ts_millis: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

fn level_label(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}
