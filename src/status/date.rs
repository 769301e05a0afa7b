use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const FRENCH_MONTHS: [&str; 12] = [
    "jan", "fév", "mar", "avr", "mai", "juin", "juil", "août", "sep", "oct", "nov", "déc",
];

const MISSING_DATE: &str = "--";

/// Parses a calendar date from the representations found in guest records.
///
/// Time of day and offsets are dropped; only the written calendar date is
/// kept. Returns `None` for blank or unrecognized input.
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

/// Renders a date as `D-MMM` with French month abbreviations (`16-mai`).
#[must_use]
pub fn format_short_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("{}-{}", d.day(), FRENCH_MONTHS[d.month0() as usize]),
        None => MISSING_DATE.to_string(),
    }
}

/// Same as [`format_short_date`] for a date still in its textual form.
#[must_use]
pub fn format_short_date_str(input: Option<&str>) -> String {
    format_short_date(input.and_then(parse_date))
}
