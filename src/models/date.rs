use chrono::{DateTime, NaiveDate, Utc};

/// Lower bound of a log query without `from`.
pub const EPOCH_DATE: &str = "1970-01-01";

/// Storage format of exercise dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rendering used in responses, e.g. `Mon Jan 01 2024`.
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

pub const INVALID_DATE: &str = "Invalid Date";

/// Current UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Parse a stored date string. Accepts `YYYY-MM-DD` (single-digit month and
/// day included), `YYYY-MM`, and full RFC 3339 timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    NaiveDate::parse_from_str(&format!("{raw}-01"), DATE_FORMAT).ok()
}

/// Human readable rendering of a stored date, or `Invalid Date` when the
/// stored value cannot be read as a date.
pub fn to_date_string(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}
