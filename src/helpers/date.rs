//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Default display format, e.g. "Jan 15, 2025"
pub const DEFAULT_DATE_FORMAT: &str = "MMM D, YYYY";

/// Parse a front-matter date in one of the common authoring formats
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Render a raw front-matter date for display.
///
/// Unparsable input is echoed back trimmed; an empty date stays empty.
pub fn display_date(raw: &str, format: &str) -> String {
    match parse_date(raw) {
        Some(date) => format_date(&date, format),
        None => raw.trim().to_string(),
    }
}

/// Machine-readable date for `<time datetime="...">`
pub fn iso_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each family so "MMMM" is not eaten by "MM"
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
        ("ZZ", "%z"),
        ("SSS", "%3f"),
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2025-01-15"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_date(" 2025/01/15 "), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_date("January 15, 2025"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_date("Jan 15, 2025"), Some(ymd(2025, 1, 15)));
        assert_eq!(
            parse_date("2025-01-15 10:30:00").map(|d| d.format("%H:%M").to_string()),
            Some("10:30".to_string())
        );
        assert_eq!(
            parse_date("2025-01-15T23:30:00-02:00").map(|d| d.format("%Y-%m-%d").to_string()),
            Some("2025-01-16".to_string())
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("2025-13-45"), None);
    }

    #[test]
    fn test_format_date() {
        let date = ymd(2024, 1, 5);
        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-01-05");
        assert_eq!(format_date(&date, "YYYY/MM/DD"), "2024/01/05");
        assert_eq!(format_date(&date, "MMMM D, YYYY"), "January 5, 2024");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2025-01-15", DEFAULT_DATE_FORMAT), "Jan 15, 2025");
        assert_eq!(display_date("2025-03-02", DEFAULT_DATE_FORMAT), "Mar 2, 2025");
        assert_eq!(display_date(" someday ", DEFAULT_DATE_FORMAT), "someday");
        assert_eq!(display_date("", DEFAULT_DATE_FORMAT), "");
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(iso_date("Jan 15, 2025"), Some("2025-01-15".to_string()));
        assert_eq!(iso_date("later"), None);
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(moment_to_chrono_format("MMM D, YYYY"), "%b %-d, %Y");
    }
}
