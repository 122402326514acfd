//! Calendar arithmetic for the timeline: stepping, truncation, differences
//! and label formatting. All functions are pure; weeks start on Monday.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn add_hours(date: NaiveDateTime, n: i64) -> NaiveDateTime {
    date + Duration::hours(n)
}

pub fn add_days(date: NaiveDateTime, n: i64) -> NaiveDateTime {
    date + Duration::days(n)
}

pub fn add_weeks(date: NaiveDateTime, n: i64) -> NaiveDateTime {
    date + Duration::weeks(n)
}

/// Add a signed number of calendar months. Day-of-month overflow clamps to
/// the last day of the target month (Jan 31 + 1 month = Feb 28).
pub fn add_months(date: NaiveDateTime, n: i32) -> NaiveDateTime {
    if n >= 0 {
        date + Months::new(n as u32)
    } else {
        date - Months::new(n.unsigned_abs())
    }
}

pub fn start_of_hour(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_hms_opt(date.hour(), 0, 0).unwrap_or(date)
}

pub fn end_of_hour(date: NaiveDateTime) -> NaiveDateTime {
    date.date()
        .and_hms_milli_opt(date.hour(), 59, 59, 999)
        .unwrap_or(date)
}

pub fn start_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

/// Last representable millisecond of the day.
pub fn end_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_hms_milli_opt(23, 59, 59, 999).unwrap_or(date)
}

/// Monday 00:00 of the date's week. A Sunday rolls back six days.
pub fn start_of_week(date: NaiveDateTime) -> NaiveDateTime {
    let days_back = date.weekday().num_days_from_monday() as i64;
    start_of_day(date - Duration::days(days_back))
}

/// Sunday 23:59:59.999 of the date's week.
pub fn end_of_week(date: NaiveDateTime) -> NaiveDateTime {
    end_of_day(start_of_week(date) + Duration::days(6))
}

pub fn start_of_month(date: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .map(|first| first.and_time(NaiveTime::MIN))
        .unwrap_or(date)
}

/// Last millisecond of the date's month.
pub fn end_of_month(date: NaiveDateTime) -> NaiveDateTime {
    end_of_day(start_of_month(date) + Months::new(1) - Duration::days(1))
}

/// Number of days in the date's month.
pub fn days_in_month(date: NaiveDateTime) -> i64 {
    let first = start_of_month(date);
    (first + Months::new(1) - first).num_days()
}

/// Whole days from `b` to `a`, floored. A date one and a half days earlier
/// gives -2, not -1.
pub fn difference_in_days(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (a - b).num_milliseconds().div_euclid(86_400_000)
}

/// Signed fractional months from `b` to `a`.
///
/// The whole part counts calendar year/month fields. When the days of month
/// differ, the fraction is `dayDiff / daysIn(a's month)` if `a`'s day is
/// ahead and `dayDiff / daysIn(b's month)` if behind. Continuous, but not
/// strictly linear across months of different lengths.
pub fn difference_in_months(a: NaiveDateTime, b: NaiveDateTime) -> f64 {
    let whole = i64::from(a.year() - b.year()) * 12 + i64::from(a.month()) - i64::from(b.month());
    let day_diff = i64::from(a.day()) - i64::from(b.day());
    let mut months = whole as f64;
    if day_diff > 0 {
        months += day_diff as f64 / days_in_month(a) as f64;
    } else if day_diff < 0 {
        months += day_diff as f64 / days_in_month(b) as f64;
    }
    months
}

/// ISO 8601 week number: the week containing the date's Thursday.
pub fn week_number(date: NaiveDateTime) -> u32 {
    date.iso_week().week()
}

/// Format a date with one of the timeline label patterns. Unrecognized
/// patterns fall back to ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDateTime, pattern: &str) -> String {
    match pattern {
        "MM/DD" => date.format("%m/%d").to_string(),
        "ddd MM/DD" => date.format("%a %m/%d").to_string(),
        "MMMM YYYY" => date.format("%B %Y").to_string(),
        "MMM DD" => date.format("%b %d").to_string(),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

/// Format a day-precision date as ISO `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_iso(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
}
