use time::{macros::format_description, Date, Duration, OffsetDateTime, Weekday};

use crate::error::{Result, TrackerError};

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<Date> {
    let input = input.trim();
    Date::parse(input, format_description!("[year]-[month]-[day]"))
        .map_err(|_| TrackerError::FormatError(format!("'{input}' is not a YYYY-MM-DD date")))
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .unwrap_or_else(|_| at.to_string())
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Reject anchors that do not start a Monday-based week.
pub fn ensure_monday(date: Date) -> Result<Date> {
    if date.weekday() == Weekday::Monday {
        Ok(date)
    } else {
        Err(TrackerError::InvalidDate(format!(
            "{} is a {}, weeks start on Monday",
            format_date(date),
            date.weekday()
        )))
    }
}

fn days_after(start: Date, days: i64) -> Result<Date> {
    start.checked_add(Duration::days(days)).ok_or_else(|| {
        TrackerError::InvalidDate(format!(
            "the week starting {} runs past the last supported date",
            format_date(start)
        ))
    })
}

/// Last day of the 7-day window that starts at `start`.
pub fn week_end(start: Date) -> Result<Date> {
    days_after(start, 6)
}

/// The seven consecutive days starting at `start`.
pub fn week_days(start: Date) -> Result<[Date; 7]> {
    let mut days = [start; 7];
    for (i, day) in days.iter_mut().enumerate() {
        *day = days_after(start, i as i64)?;
    }
    Ok(days)
}

/// Monday of ISO week `week` in `year`.
pub fn monday_of_iso_week(year: i32, week: u8) -> Result<Date> {
    Date::from_iso_week_date(year, week, Weekday::Monday)
        .map_err(|_| TrackerError::InvalidDate(format!("{year} has no ISO week {week}")))
}
