//! Publication date formatting

use chrono::NaiveDate;

/// Format a `YYYY-MM-DD` publication date as "September 17, 2025".
///
/// The input is read as a calendar date with no time zone attached, so the
/// rendered day is always the day the editor typed. Empty or invalid input
/// yields an empty string.
pub fn format_publication_date(input: &str) -> String {
    parse_publication_date(input)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Parse a `YYYY-MM-DD` publication date, returning `None` when it is not a real date.
fn parse_publication_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
