use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

/// Four-digit years only.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Wire format used by the job scheduler, e.g. `2025/04/29 10:52:29.000 +0000`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f %z";

/// Format for labels on the time axis and in tooltips: `Apr 29, 10:52:29 AM`.
pub const DISPLAY_FORMAT: &str = "%b %-d, %I:%M:%S %p";

/// Parse a scheduler timestamp.
///
/// Accepts the full wire format, a bare `YYYY/MM/DD HH:MM:SS` prefix (read as
/// UTC, any trailing fraction or offset ignored), and RFC 3339, all with a
/// four-digit year. Anything else is `None`; callers treat that the same as a
/// missing timestamp.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let parsed = parse_any(raw).filter(|dt| YEAR_RANGE.contains(&dt.year()));
    if parsed.is_none() && !raw.is_empty() {
        tracing::debug!(timestamp = raw, "unparseable timestamp, treating as absent");
    }
    parsed
}

fn parse_any(raw: &str) -> Option<DateTime<Utc>> {
    // %Y takes signed years of any width, so pin the shape first.
    if !raw.as_bytes().get(..4)?.iter().all(u8::is_ascii_digit) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        return Some(dt.with_timezone(&Utc));
    }

    // "YYYY/MM/DD HH:MM:SS" is 19 bytes; anything after it is ignored.
    if let Some(prefix) = raw.get(..19) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(prefix, "%Y/%m/%d %H:%M:%S") {
            return Some(naive.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render an instant the way the chart labels it.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format(DISPLAY_FORMAT).to_string()
}

/// Format an optional raw timestamp for display.
pub fn format_timestamp(raw: Option<&str>) -> String {
    match raw {
        None => "Not set".to_string(),
        Some(s) => match parse_timestamp(s) {
            Some(dt) => format_instant(dt),
            None => "Invalid date".to_string(),
        },
    }
}
