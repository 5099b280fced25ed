//! Calendar arithmetic and conversion helpers.
//!
//! Offsets between dates are measured from [`REFERENCE_DATE`], the first of
//! January of [`MIN_YEAR`]. Functions taking a [`CivilDate`] return
//! `DateError::Uninitialized` for the all-zero sentinel.

use tracing::warn;

pub use crate::types::{days_in_month, is_leap_year};
use crate::{
    CivilDate, ClockTime, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DateError, HOURS_PER_DAY, JANUARY, MAX_MONTH,
    MIN_YEAR, MINUTES_PER_HOUR, MONTH_NAMES, MONTH_SHORT_NAMES, REFERENCE_DATE, SECONDS_PER_MINUTE, Weekday,
};

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// 1-based ordinal of `date` within its year, or 0 for the sentinel.
pub fn day_of_year(date: &CivilDate) -> u16 {
    if !date.is_set() {
        return 0;
    }
    let preceding: u16 = (JANUARY..date.month())
        .map(|month| u16::from(days_in_month(date.year(), month)))
        .sum();
    preceding + u16::from(date.day())
}

fn days_from_reference(date: &CivilDate) -> Result<u32, DateError> {
    if !date.is_set() {
        return Err(DateError::Uninitialized);
    }
    let whole_years: u32 = (REFERENCE_DATE.2..date.year())
        .map(|year| u32::from(days_in_year(year)))
        .sum();
    Ok(whole_years + u32::from(day_of_year(date)) - 1)
}

fn months_from_reference(date: &CivilDate) -> Result<u32, DateError> {
    if !date.is_set() {
        return Err(DateError::Uninitialized);
    }
    let years = u32::from(date.year() - MIN_YEAR);
    Ok(years * u32::from(MAX_MONTH) + u32::from(date.month() - REFERENCE_DATE.1))
}

/// Number of days separating `a` and `b`, in either order.
///
/// # Errors
/// Returns `DateError::Uninitialized` if either date is the sentinel.
pub fn days_between(a: &CivilDate, b: &CivilDate) -> Result<u32, DateError> {
    Ok(days_from_reference(a)?.abs_diff(days_from_reference(b)?))
}

/// Number of calendar months separating `a` and `b`.
///
/// Only the month and year take part, so the 31st of January and the 1st of
/// February are one month apart.
///
/// # Errors
/// Returns `DateError::Uninitialized` if either date is the sentinel.
pub fn months_between(a: &CivilDate, b: &CivilDate) -> Result<u32, DateError> {
    Ok(months_from_reference(a)?.abs_diff(months_from_reference(b)?))
}

/// Difference of the calendar years of `a` and `b`.
///
/// # Errors
/// Returns `DateError::Uninitialized` if either date is the sentinel.
pub fn years_between(a: &CivilDate, b: &CivilDate) -> Result<u16, DateError> {
    if !a.is_set() || !b.is_set() {
        return Err(DateError::Uninitialized);
    }
    Ok(a.year().abs_diff(b.year()))
}

// Negative day counts convert to 0.

pub fn days_to_hours(days: i32) -> i64 {
    i64::from(days.max(0)) * HOURS_PER_DAY
}

pub fn days_to_minutes(days: i32) -> i64 {
    days_to_hours(days) * MINUTES_PER_HOUR
}

pub fn days_to_seconds(days: i32) -> i64 {
    days_to_minutes(days) * SECONDS_PER_MINUTE
}

/// Three-letter English name of `month`, e.g. `"Aug"`.
pub fn month_short_name(month: u8) -> Option<&'static str> {
    month_name(&MONTH_SHORT_NAMES, month)
}

/// Full English name of `month`, e.g. `"August"`.
pub fn month_long_name(month: u8) -> Option<&'static str> {
    month_name(&MONTH_NAMES, month)
}

fn month_name(table: &[&'static str; 13], month: u8) -> Option<&'static str> {
    (JANUARY..=MAX_MONTH)
        .contains(&month)
        .then(|| table[usize::from(month)])
}

/// True if (`day`, `month`, `year`) names a date between `MIN_YEAR` and `MAX_YEAR`.
pub fn is_valid_date(day: u8, month: u8, year: u16) -> bool {
    CivilDate::try_new(day, month, year).is_ok()
}

/// Parses every input with [`CivilDate::parse`], keeping the successes in
/// input order.
///
/// Entries that fail to parse are skipped and reported as `warn` events.
pub fn parse_date_strings<I>(inputs: I) -> Vec<CivilDate>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    inputs
        .into_iter()
        .filter_map(|item| {
            let input = item.as_ref();
            CivilDate::parse(input)
                .inspect_err(|err| warn!(input, %err, "skipping unparseable date"))
                .ok()
        })
        .collect()
}

/// Weekday of a date string in any layout [`CivilDate::parse`] accepts.
pub fn day_of_week_str(input: &str) -> Option<Weekday> {
    CivilDate::parse(input)
        .inspect_err(|err| warn!(input, %err, "cannot compute weekday"))
        .ok()
        .and_then(|date| date.day_of_week())
}

/// Milliseconds since midnight.
pub fn to_milliseconds(time: &ClockTime) -> i64 {
    time.total_milliseconds()
}

/// The current local time as `HH:MM:SS:MMM`.
pub fn current_time_str() -> String {
    ClockTime::now().to_string()
}
