use chrono::{Duration, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn tomorrow() -> NaiveDate {
    today() + Duration::days(1)
}

pub fn next_week() -> NaiveDate {
    today() + Duration::days(7)
}

pub fn iso_day(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Parse a plain calendar day (YYYY-MM-DD).
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Validate an event date as entered by the user. Accepts "YYYY-MM-DD" and
/// "YYYY-MM-DD HH:MM"; returns the trimmed value, stored as-is.
pub fn parse_event_date(s: &str) -> Option<String> {
    let s = s.trim();
    if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").is_ok()
    {
        return Some(s.to_string());
    }
    None
}
