//! Display formatting helpers

use chrono::{DateTime, NaiveDate, Utc};

/// Words per minute used for the reading-time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Shown for timestamps that cannot be parsed
pub const INVALID_DATE: &str = "Invalid date";

/// Format a count with thousands separators (`12450` → `12,450`)
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}

/// Short date for tables (`Jan 15, 2024`)
#[must_use]
pub fn format_short_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp).map_or_else(
        || INVALID_DATE.to_string(),
        |dt| dt.format("%b %-d, %Y").to_string(),
    )
}

/// Long date with time for the preview header (`January 15, 2024 at 10:30 AM`)
#[must_use]
pub fn format_long_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp).map_or_else(
        || INVALID_DATE.to_string(),
        |dt| dt.format("%B %-d, %Y at %I:%M %p").to_string(),
    )
}

/// Estimated reading time in whole minutes, rounded up
///
/// Absent content reads in zero minutes; any present content takes at least one.
#[must_use]
pub fn reading_time_minutes(content: Option<&str>) -> usize {
    content.map_or(0, |text| {
        text.split_whitespace()
            .count()
            .div_ceil(WORDS_PER_MINUTE)
            .max(1)
    })
}

/// Case-insensitive substring match
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
