use chrono::{Datelike, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY-MM` of the local calendar date.
pub fn current_year_month() -> String {
    year_month(&today())
}

pub fn year_month(d: &NaiveDate) -> String {
    format!("{:04}-{:02}", d.year(), d.month())
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts unpadded fields ("2024-3-5"), which would break the
/// lexical ordering of the `date` column, so the input must also round-trip.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let d = NaiveDate::parse_from_str(s, DATE_FORMAT).ok()?;
    (format_date(&d) == s).then_some(d)
}

/// Validate a `YYYY-MM` month and return it unchanged.
pub fn parse_year_month(s: &str) -> Option<String> {
    let first = parse_date(&format!("{s}-01"))?;
    (year_month(&first) == s).then(|| s.to_string())
}
