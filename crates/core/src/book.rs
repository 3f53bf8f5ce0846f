//! Field rules for books and ratings.
//!
//! Years and rating scores arrive as text on some input surfaces (query
//! parameters, creation payloads) and as integers on others, so both textual
//! and numeric checks live here.

use std::sync::LazyLock;

use regex::Regex;

/// Lowest score a rating can carry.
pub const MIN_SCORE: i32 = 1;
/// Highest score a rating can carry.
pub const MAX_SCORE: i32 = 5;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(19[0-9]{2}|20[0-9]{2})$").expect("valid regex"));

static RATING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-5]$").expect("valid regex"));

/// Check that a textual year names a 4-digit year in 1900-2099.
pub fn is_valid_year_text(year: &str) -> bool {
    YEAR_RE.is_match(year)
}

/// Check that a textual rating names a single digit in 1-5.
pub fn is_valid_rating_text(rating: &str) -> bool {
    RATING_RE.is_match(rating)
}

/// Check that a numeric score is within the allowed range.
pub fn is_valid_score(score: i32) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}
