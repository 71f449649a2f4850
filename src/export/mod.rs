//! Export of ranked comments.
//!
//! This module renders a ranked comment list for people (numbered plain-text
//! listing) or programs (JSON document), and writes it to a file or stdout.

mod json;
mod text;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub use json::{error_json, to_json};
pub use text::format_text;

/// Writes rendered output to `output`, or to stdout when `None`.
///
/// A trailing newline is added when missing.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    writer
        .write_all(content.as_bytes())
        .context("Failed to write output")?;
    if !content.ends_with('\n') {
        writer.write_all(b"\n").context("Failed to write output")?;
    }
    writer.flush().context("Failed to flush output")?;
    Ok(())
}
