//! Like-count normalization.
//!
//! The site renders like counts as display strings: comma-grouped ("1,234"),
//! abbreviated ("2.5K", "1M") or absent. Both extraction paths reduce them to
//! an integer the same way; the markup path is stricter about what counts as
//! a malformed value.

use thiserror::Error;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// A like count that looked numeric but could not be read as a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LikeCountError {
    /// The part before a `K`/`M` suffix is not a decimal number.
    #[error("invalid abbreviated like count '{0}'")]
    InvalidAbbreviation(String),
    /// Digits and decimal points that do not form an integer ("12.5").
    #[error("invalid like count '{0}'")]
    InvalidInteger(String),
}

/// Normalizes a like count from structured page data.
///
/// 1. Thousands-separator commas are removed.
/// 2. A `K` anywhere scales the remaining decimal by 1,000.
/// 3. Otherwise an `M` scales it by 1,000,000.
/// 4. Otherwise an all-digit string is read as an integer.
/// 5. Anything else, including the empty string, is 0.
///
/// Scaled values are truncated toward zero and never negative.
pub fn normalize_like_count(raw: &str) -> u64 {
    let cleaned = raw.trim().replace(',', "");
    if let Some(scaled) = scale_abbreviated(&cleaned) {
        return scaled.unwrap_or(0);
    }
    if is_all_digits(&cleaned) {
        return cleaned.parse().unwrap_or(u64::MAX);
    }
    0
}

/// Normalizes a like count scraped from comment markup.
///
/// Same rules as [`normalize_like_count`], except that a string made only of
/// digits and decimal points must then read as an integer, and an abbreviated
/// value must carry a valid decimal. Strings containing any other character
/// are 0.
///
/// # Errors
///
/// Returns a `LikeCountError` for values such as "12.5" or "x.yK"; the caller
/// skips the element that carried it.
pub fn parse_markup_like_count(raw: &str) -> Result<u64, LikeCountError> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return Ok(0);
    }
    if let Some(scaled) = scale_abbreviated(&cleaned) {
        return scaled;
    }
    if is_all_digits(&cleaned.replace('.', "")) {
        return cleaned
            .parse()
            .map_err(|_| LikeCountError::InvalidInteger(cleaned.clone()));
    }
    Ok(0)
}

/// Applies the `K`/`M` rules. `None` when neither suffix is present.
fn scale_abbreviated(cleaned: &str) -> Option<Result<u64, LikeCountError>> {
    let (suffix, factor) = if cleaned.contains('K') {
        ('K', THOUSAND)
    } else if cleaned.contains('M') {
        ('M', MILLION)
    } else {
        return None;
    };

    let prefix = cleaned.replace(suffix, "");
    let scaled = prefix
        .trim()
        .parse::<f64>()
        .map(|value| truncate_count(value * factor))
        .map_err(|_| LikeCountError::InvalidAbbreviation(cleaned.to_string()));
    Some(scaled)
}

fn truncate_count(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        // Saturates at u64::MAX for infinite input
        value.trunc() as u64
    }
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
