//! HTTP date/time helpers (RFC 1123, as required by RFC 2616 §3.3.1).

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use regex::Regex;
use std::sync::LazyLock;

use super::error::{ApiError, Result};

static RFC1123_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_]{3}, (?P<day>[0-9]{2}) (?P<month>[A-Za-z0-9_]{3}) (?P<year>[0-9]{4}) (?P<hour>[0-9]{2}):(?P<min>[0-9]{2}):(?P<sec>[0-9]{2}) GMT$",
    )
    .expect("RFC1123_DATE must compile")
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Convert an aware date/time to naive UTC.
pub fn force_naive_utc<Tz: TimeZone>(value: &DateTime<Tz>) -> NaiveDateTime {
    value.naive_utc()
}

/// Format an aware date/time as an HTTP date, e.g. `Sun, 01 Jan 2012 15:32:23 GMT`.
pub fn http_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    http_datetime_naive(&force_naive_utc(value))
}

/// Format a naive date/time, taken to be UTC, as an HTTP date.
pub fn http_datetime_naive(value: &NaiveDateTime) -> String {
    value.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse an HTTP date in RFC 1123 form into naive UTC.
///
/// Only the RFC 1123 form is accepted since the Iconfinder API always emits
/// it. The weekday is not checked against the date.
pub fn parse_http_datetime(value: &str) -> Result<NaiveDateTime> {
    let invalid = || ApiError::InvalidDate(value.to_string());

    let caps = RFC1123_DATE.captures(value).ok_or_else(invalid)?;
    let field = |name: &str| -> Result<u32> {
        caps[name].parse().map_err(|_| invalid())
    };

    let month_name = caps["month"].to_ascii_lowercase();
    let month_index = MONTHS
        .iter()
        .position(|m| *m == month_name)
        .ok_or_else(invalid)?;
    let month = month_index as u32 + 1;

    let year = caps["year"].parse::<i32>().map_err(|_| invalid())?;

    let date = NaiveDate::from_ymd_opt(year, month, field("day")?).ok_or_else(invalid)?;
    date.and_hms_opt(field("hour")?, field("min")?, field("sec")?)
        .ok_or_else(invalid)
}
