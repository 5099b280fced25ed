mod calendar;
mod consts;
mod cyclic;
mod formatted;
pub mod math;
mod prelude;
mod time;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{GridCell, MonthCalendar, MonthGrid};
pub use consts::*;
pub use formatted::{DateFormat, FormattedDate};
pub use math::parse_date_strings;
pub use time::{ClockTime, TimeError};
pub use types::{Day, Month, Weekday, Year};

use crate::cyclic::MONTHS;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;
use types::days_in_month;

/// A Gregorian calendar date between `MIN_YEAR` and `MAX_YEAR`.
///
/// A date is either a valid (day, month, year) triple or the all-zero
/// sentinel left behind by [`CivilDate::new`] when it is handed invalid
/// components. [`CivilDate::default`] is the sentinel as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CivilDate {
    ymd: Option<Ymd>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Ymd {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Errors produced by date construction, parsing and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The input matched none of the recognized date layouts.
    #[error("Error parsing date: '{0}'. Check formatting.")]
    Format(String),

    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u16),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { day: u8, month: u8, year: u16 },

    /// Arithmetic or navigation would leave the supported year range.
    #[error("Date out of range: years must stay within {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    OutOfRange,

    /// Arithmetic was attempted on the all-zero sentinel date.
    #[error("Date is uninitialized")]
    Uninitialized,
}

impl DateError {
    /// True for inputs that matched no recognized layout.
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// True for well-formed inputs whose values are not a calendar date.
    pub const fn is_invalid_value(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear(_) | Self::InvalidMonth(_) | Self::InvalidDay { .. }
        )
    }
}

impl CivilDate {
    /// The all-zero sentinel date.
    pub const UNSET: Self = Self { ymd: None };

    /// Creates a date, falling back to the sentinel when the components are invalid.
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        Self::try_new(day, month, year).unwrap_or_else(|err| {
            debug!(day, month, year, %err, "invalid date components, using sentinel");
            Self::UNSET
        })
    }

    /// Creates a date, rejecting invalid components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` for the
    /// first component that is out of range.
    pub fn try_new(day: u8, month: u8, year: u16) -> Result<Self, DateError> {
        Ymd::validate(day, month, year).map(|ymd| Self { ymd: Some(ymd) })
    }

    /// Parses `YYYY-MM-DD`, `DD-MM-YYYY`, `YYYY/MM/DD` or `DD/MM/YYYY`.
    ///
    /// The two non-year fields are read as (day, month) first and as
    /// (month, day) if that is not a valid date, so `"09/07/2023"` is the
    /// 9th of July while `"07/31/2023"` is the 31st of July.
    ///
    /// The year-first layouts follow the same rule, so their middle field is
    /// tried as the day: `"2023-08-01"` is the 8th of January, not the 1st of
    /// August. An ISO date reads as intended only when its day is above 12.
    ///
    /// # Errors
    /// Returns `DateError::Format` if no layout matches, or the validation
    /// error of the (day, month) reading if neither reading is a valid date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let (a, b, year) = DATE_LAYOUTS
            .iter()
            .find_map(|(layout, re)| re.captures(s).map(|caps| layout.fields(caps.extract().1)))
            .ok_or_else(|| DateError::Format(s.to_owned()))?;

        let a = parse_number::<u8>(a, s)?;
        let b = parse_number::<u8>(b, s)?;
        let year = parse_number::<u16>(year, s)?;

        Self::try_new(a, b, year).or_else(|first| Self::try_new(b, a, year).map_err(|_| first))
    }

    /// Replaces the date.
    ///
    /// # Errors
    /// Returns the validation error and leaves the date unchanged if the
    /// components are invalid.
    pub fn set_date(&mut self, day: u8, month: u8, year: u16) -> Result<(), DateError> {
        *self = Self::try_new(day, month, year)?;
        Ok(())
    }

    /// Shifts the date by `days`, rolling over month and year boundaries.
    ///
    /// # Errors
    /// See [`CivilDate::add_months`].
    pub fn add_days(&mut self, days: i32) -> Result<(), DateError> {
        self.shift(0, i64::from(days))
    }

    /// Shifts the month by `months`. A day past the end of the destination
    /// month rolls forward into the following month.
    ///
    /// # Errors
    /// Returns `DateError::Uninitialized` on the sentinel, or
    /// `DateError::OutOfRange` if the result would leave `MIN_YEAR..=MAX_YEAR`.
    /// The date is unchanged on error.
    pub fn add_months(&mut self, months: i32) -> Result<(), DateError> {
        self.shift(i64::from(months), 0)
    }

    /// Shifts the year by `years`. The 29th of February becomes the 1st of
    /// March in a common year.
    ///
    /// # Errors
    /// See [`CivilDate::add_months`].
    pub fn add_years(&mut self, years: i32) -> Result<(), DateError> {
        self.shift(i64::from(years) * i64::from(MAX_MONTH), 0)
    }

    fn shift(&mut self, months: i64, days: i64) -> Result<(), DateError> {
        let ymd = self.ymd.ok_or(DateError::Uninitialized)?;
        self.ymd = Some(ymd.shifted(months, days)?);
        Ok(())
    }

    /// Day of month, or 0 for the sentinel.
    pub fn day(&self) -> u8 {
        self.ymd.map_or(0, |ymd| ymd.day.get())
    }

    /// Month of year, or 0 for the sentinel.
    pub fn month(&self) -> u8 {
        self.ymd.map_or(0, |ymd| ymd.month.get())
    }

    /// Year, or 0 for the sentinel.
    pub fn year(&self) -> u16 {
        self.ymd.map_or(0, |ymd| ymd.year.get())
    }

    /// Returns the typed components if this is not the sentinel
    pub fn components(&self) -> Option<(Day, Month, Year)> {
        self.ymd.map(|ymd| (ymd.day, ymd.month, ymd.year))
    }

    /// False for the sentinel.
    pub const fn is_set(&self) -> bool {
        self.ymd.is_some()
    }

    pub fn is_leap_year(&self) -> bool {
        self.ymd.is_some_and(|ymd| ymd.year.is_leap())
    }

    /// Weekday by Zeller's congruence, with January and February counted as
    /// months 13 and 14 of the previous year. `None` for the sentinel.
    pub fn day_of_week(&self) -> Option<Weekday> {
        self.ymd.map(Ymd::weekday)
    }

    fn sort_key(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }
}

impl Ymd {
    fn validate(day: u8, month: u8, year: u16) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Applies raw month and day deltas, then renormalizes.
    fn shifted(self, months: i64, days: i64) -> Result<Self, DateError> {
        let (month, carry) = MONTHS.normalize(i64::from(self.month.get()) + months);
        let mut month = u8::try_from(month).map_err(|_| DateError::OutOfRange)?;
        let mut year = step_year(self.year.get(), carry)?;
        let mut day = i64::from(self.day.get()) + days;

        loop {
            let len = i64::from(days_in_month(year, month));
            if day <= len {
                break;
            }
            day -= len;
            if month == DECEMBER {
                month = JANUARY;
                year = step_year(year, 1)?;
            } else {
                month += 1;
            }
        }

        while day < i64::from(MIN_DAY) {
            if month == JANUARY {
                month = DECEMBER;
                year = step_year(year, -1)?;
            } else {
                month -= 1;
            }
            day += i64::from(days_in_month(year, month));
        }

        let day = u8::try_from(day).map_err(|_| DateError::OutOfRange)?;
        Self::validate(day, month, year)
    }

    fn weekday(self) -> Weekday {
        let q = i32::from(self.day.get());
        let mut m = i32::from(self.month.get());
        let mut y = i32::from(self.year.get());
        if m < 3 {
            m += 12;
            y -= 1;
        }
        let k = y % 100;
        let j = y / 100;
        // h = 0 is Saturday
        let h = (q + 13 * (m + 1) / 5 + k + k / 4 + j / 4 + 5 * j).rem_euclid(7);
        u8::try_from((h + 5) % 7).map_or(Weekday::Monday, Weekday::from_monday_offset)
    }
}

fn step_year(year: u16, delta: i64) -> Result<u16, DateError> {
    u16::try_from(i64::from(year) + delta)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or(DateError::OutOfRange)
}

// --- string layouts ---

#[derive(Debug, Clone, Copy)]
enum Layout {
    YearFirst,
    YearLast,
}

impl Layout {
    /// Orders captured fields as (first non-year, second non-year, year).
    const fn fields<'a>(self, [x, y, z]: [&'a str; 3]) -> (&'a str, &'a str, &'a str) {
        match self {
            Self::YearFirst => (y, z, x),
            Self::YearLast => (x, y, z),
        }
    }
}

/// Recognized date layouts, tried in order.
static DATE_LAYOUTS: LazyLock<[(Layout, Regex); 4]> = LazyLock::new(|| {
    [
        (Layout::YearFirst, pattern(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$")),
        (Layout::YearLast, pattern(r"^([0-9]{2})-([0-9]{2})-([0-9]{4})$")),
        (Layout::YearFirst, pattern(r"^([0-9]{4})/([0-9]{2})/([0-9]{2})$")),
        (Layout::YearLast, pattern(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$")),
    ]
});

#[allow(clippy::expect_used)]
pub(crate) fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("layout patterns are valid regular expressions")
}

fn parse_number<T: FromStr>(field: &str, input: &str) -> Result<T, DateError> {
    field
        .parse::<T>()
        .map_err(|_| DateError::Format(input.to_owned()))
}

impl FromStr for CivilDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<(u8, u8, u16)> for CivilDate {
    type Error = DateError;

    fn try_from((day, month, year): (u8, u8, u16)) -> Result<Self, Self::Error> {
        Self::try_new(day, month, year)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{}",
            self.day(),
            self.month(),
            self.year()
        )
    }
}

impl PartialOrd for CivilDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CivilDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // The sentinel sorts before every valid date
        self.sort_key().cmp(&other.sort_key())
    }
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == UNSET_STR {
            return Ok(Self::UNSET);
        }
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Display form of [`CivilDate::UNSET`]. Accepted only when deserializing.
const UNSET_STR: &str = "00-00-0";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_default_is_sentinel() {
        let d = CivilDate::default();
        assert_eq!((d.day(), d.month(), d.year()), (0, 0, 0));
        assert!(!d.is_set());
        assert!(!d.is_leap_year());
        assert_eq!(d.day_of_week(), None);
        assert_eq!(d, CivilDate::UNSET);
    }

    #[test]
    fn test_new_invalid_components_yield_sentinel() {
        struct TestCase {
            day:         u8,
            month:       u8,
            year:        u16,
            description: &'static str,
        }

        let cases = [
            TestCase {
                day:         1,
                month:       1,
                year:        10000,
                description: "year past MAX_YEAR",
            },
            TestCase {
                day:         1,
                month:       1,
                year:        1582,
                description: "year before MIN_YEAR",
            },
            TestCase {
                day:         1,
                month:       24,
                year:        2001,
                description: "month out of range",
            },
            TestCase {
                day:         50,
                month:       1,
                year:        2001,
                description: "day out of range",
            },
            TestCase {
                day:         29,
                month:       2,
                year:        2023,
                description: "29th February in a common year",
            },
        ];

        for case in &cases {
            let d = CivilDate::new(case.day, case.month, case.year);
            assert_eq!(d, CivilDate::UNSET, "{}", case.description);
            assert!(!d.is_leap_year(), "{}", case.description);

            let mut target = date(1, 1, 2000);
            let result = target.set_date(case.day, case.month, case.year);
            assert!(
                result.as_ref().is_err_and(DateError::is_invalid_value),
                "set_date should fail for {}",
                case.description
            );
            assert_eq!(target, date(1, 1, 2000), "set_date must not modify on error");
        }
    }

    #[test]
    fn test_new_valid_components_round_trip() {
        for year in [1583, 1600, 1900, 2000, 2023, 2024, 9999] {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let d = CivilDate::new(day, month, year);
                    assert_eq!((d.day(), d.month(), d.year()), (day, month, year));
                    assert_eq!(d.is_leap_year(), types::is_leap_year(year));
                }
            }
        }
    }

    #[test]
    fn test_leap_year_flag() {
        assert!(!date(22, 12, 2001).is_leap_year());
        assert!(date(22, 12, 2004).is_leap_year());
    }

    #[test]
    fn test_display() {
        assert_eq!(date(22, 12, 2004).to_string(), "22-12-2004");
        assert_eq!(date(2, 2, 1969).to_string(), "02-02-1969");
    }

    #[test]
    fn test_set_date_valid() {
        let mut d = CivilDate::default();
        d.set_date(9, 7, 2002).unwrap();
        assert_eq!((d.day(), d.month(), d.year()), (9, 7, 2002));
        assert!(!d.is_leap_year());
    }

    #[test]
    fn test_set_date_invalid() {
        let mut d = CivilDate::default();
        let result = d.set_date(9, 20, 2002);
        assert!(matches!(result, Err(DateError::InvalidMonth(20))));
        assert!(!d.is_set());
    }

    #[test]
    fn test_day_of_week() {
        let expected = [
            (17, Weekday::Monday),
            (18, Weekday::Tuesday),
            (19, Weekday::Wednesday),
            (20, Weekday::Thursday),
            (21, Weekday::Friday),
            (22, Weekday::Saturday),
            (23, Weekday::Sunday),
        ];
        for (day, weekday) in expected {
            assert_eq!(date(day, 7, 2023).day_of_week(), Some(weekday));
        }
        assert_eq!(date(17, 7, 2023).day_of_week().unwrap().name(), "Monday");
    }

    #[test]
    fn test_day_of_week_january_february() {
        // Months 1 and 2 are treated as 13 and 14 of the previous year
        assert_eq!(date(1, 1, 2000).day_of_week(), Some(Weekday::Saturday));
        assert_eq!(date(29, 2, 2000).day_of_week(), Some(Weekday::Tuesday));
        assert_eq!(date(1, 1, 1583).day_of_week(), Some(Weekday::Saturday));
        assert_eq!(date(31, 12, 9999).day_of_week(), Some(Weekday::Friday));
    }

    #[test]
    fn test_day_of_week_advances_daily() {
        let mut d = date(1, 1, 1999);
        let mut expected = d.day_of_week().unwrap();
        for _ in 0..800 {
            d.add_days(1).unwrap();
            expected = Weekday::from_monday_offset(expected.monday_offset() + 1);
            assert_eq!(d.day_of_week(), Some(expected), "{d}");
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(date(22, 12, 2001), date(22, 12, 2001));
        assert_ne!(date(22, 12, 2001), date(9, 7, 2002));
        assert_ne!(date(9, 7, 2002), date(22, 12, 2001));
    }

    #[test]
    fn test_ordering() {
        let a = date(22, 12, 2001);
        let b = date(9, 7, 2002);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= a);
        assert!(a >= a);
        assert!(date(1, 2, 2002) > date(31, 1, 2002));
        assert!(date(2, 1, 2002) > date(1, 1, 2002));
        assert!(CivilDate::UNSET < date(1, 1, 1583));
    }

    #[test]
    fn test_ordering_is_consistent() {
        let samples = [
            date(1, 1, 1583),
            date(31, 12, 1999),
            date(1, 1, 2000),
            date(15, 6, 2000),
            date(15, 7, 2000),
            date(16, 7, 2000),
            date(31, 12, 9999),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(a < b, b > a);
                assert_eq!(a <= b, !(b < a));
                assert_eq!(a >= b, !(a < b));
                assert_eq!(a == b, !(a < b) && !(b < a));
                assert_eq!(a != b, a < b || b < a);
                for c in &samples {
                    if a < b && b < c {
                        assert!(a < c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_add_days() {
        let mut d = date(28, 7, 2023);
        d.add_days(4).unwrap();
        assert_eq!(d, date(1, 8, 2023));
        d.add_days(-20).unwrap();
        assert_eq!(d, date(12, 7, 2023));
    }

    #[test]
    fn test_add_days_across_year_and_leap_day() {
        let mut d = date(31, 12, 2023);
        d.add_days(1).unwrap();
        assert_eq!(d, date(1, 1, 2024));
        d.add_days(59).unwrap();
        assert_eq!(d, date(29, 2, 2024));
        d.add_days(366).unwrap();
        assert_eq!(d, date(1, 3, 2025));
        d.add_days(-366).unwrap();
        assert_eq!(d, date(29, 2, 2024));
    }

    #[test]
    fn test_add_months() {
        let mut d = date(28, 8, 2023);
        d.add_months(8).unwrap();
        assert_eq!(d, date(28, 4, 2024));
        d.add_months(-24).unwrap();
        assert_eq!(d, date(28, 4, 2022));
        d.add_months(9).unwrap();
        assert_eq!(d, date(28, 1, 2023));
        d.add_months(-13).unwrap();
        assert_eq!(d, date(28, 12, 2021));
        d.add_months(25).unwrap();
        assert_eq!(d, date(28, 1, 2024));
    }

    #[test]
    fn test_add_months_rolls_day_past_short_month() {
        let mut d = date(31, 1, 2023);
        d.add_months(1).unwrap();
        assert_eq!(d, date(3, 3, 2023));

        let mut d = date(31, 1, 2024);
        d.add_months(1).unwrap();
        assert_eq!(d, date(2, 3, 2024));
    }

    #[test]
    fn test_add_years() {
        let mut d = date(28, 7, 2023);
        d.add_years(5).unwrap();
        assert_eq!(d, date(28, 7, 2028));
        d.add_years(-10).unwrap();
        assert_eq!(d, date(28, 7, 2018));

        let mut leap = date(29, 2, 2024);
        leap.add_years(1).unwrap();
        assert_eq!(leap, date(1, 3, 2025));
    }

    #[test]
    fn test_add_inverse_restores_date() {
        let starts = [date(1, 1, 1600), date(15, 6, 2000), date(28, 2, 2023), date(30, 11, 9000)];
        for start in starts {
            for delta in [-1000, -365, -31, -1, 0, 1, 29, 365, 1000, 40_000] {
                let mut d = start;
                d.add_days(delta).unwrap();
                d.add_days(-delta).unwrap();
                assert_eq!(d, start, "add_days({delta})");
            }
            for delta in [-120, -13, -1, 1, 12, 25, 600] {
                let mut d = start;
                d.add_months(delta).unwrap();
                d.add_months(-delta).unwrap();
                assert_eq!(d, start, "add_months({delta})");
            }
            for delta in [-16, -1, 1, 4, 100] {
                let mut d = start;
                d.add_years(delta).unwrap();
                d.add_years(-delta).unwrap();
                assert_eq!(d, start, "add_years({delta})");
            }
        }
    }

    #[test]
    fn test_add_out_of_range() {
        let mut d = date(31, 12, 9999);
        assert_eq!(d.add_days(1), Err(DateError::OutOfRange));
        assert_eq!(d, date(31, 12, 9999));
        assert_eq!(d.add_months(1), Err(DateError::OutOfRange));
        assert_eq!(d.add_years(i32::MAX), Err(DateError::OutOfRange));

        let mut d = date(1, 1, 1583);
        assert_eq!(d.add_days(-1), Err(DateError::OutOfRange));
        assert_eq!(d.add_months(i32::MIN), Err(DateError::OutOfRange));
        assert_eq!(d.add_days(i32::MAX), Err(DateError::OutOfRange));
        assert_eq!(d, date(1, 1, 1583));
    }

    #[test]
    fn test_add_on_sentinel() {
        let mut d = CivilDate::default();
        assert_eq!(d.add_days(1), Err(DateError::Uninitialized));
        assert_eq!(d.add_months(1), Err(DateError::Uninitialized));
        assert_eq!(d.add_years(1), Err(DateError::Uninitialized));
        assert!(!d.is_set());
    }

    #[test]
    fn test_parse_all_layouts() {
        assert_eq!("22-12-2001".parse::<CivilDate>().unwrap(), date(22, 12, 2001));
        assert_eq!("22/12/2001".parse::<CivilDate>().unwrap(), date(22, 12, 2001));
        assert_eq!("2001-12-22".parse::<CivilDate>().unwrap(), date(22, 12, 2001));
        assert_eq!("2001/12/22".parse::<CivilDate>().unwrap(), date(22, 12, 2001));
    }

    #[test]
    fn test_parse_day_month_tried_first() {
        // Both readings valid: the (day, month) reading wins
        assert_eq!(CivilDate::parse("09/07/2023").unwrap(), date(9, 7, 2023));
        assert_eq!(CivilDate::parse("2002/09/07").unwrap(), date(9, 7, 2002));
        assert_eq!(CivilDate::parse("2023-08-01").unwrap(), date(8, 1, 2023));
        // Only the swapped reading is valid
        assert_eq!(CivilDate::parse("07/31/2023").unwrap(), date(31, 7, 2023));
        assert_eq!(CivilDate::parse("2023-12-25").unwrap(), date(25, 12, 2023));
    }

    #[test]
    fn test_parse_invalid_values() {
        for input in ["22/22/2001", "46/12/2001", "22-90-2001", "2001-90-56", "30-02-2023", "01-01-1500"] {
            let result = CivilDate::parse(input);
            assert!(
                result.as_ref().is_err_and(DateError::is_invalid_value),
                "{input} should be an invalid date, got {result:?}"
            );
        }
        assert!(matches!(
            CivilDate::parse("22/22/2001"),
            Err(DateError::InvalidMonth(22))
        ));
    }

    #[test]
    fn test_parse_bad_format() {
        for input in [
            "22-12/2001",
            "invalid_date",
            "1/1/2001",
            "2001-1-1",
            "22.12.2001",
            " 22-12-2001",
            "22-12-2001 ",
            "22-12-20011",
            "",
        ] {
            let result = CivilDate::parse(input);
            assert_eq!(result, Err(DateError::Format(input.to_owned())), "{input}");
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        assert!(CivilDate::parse("٢٢-١٢-٢٠٠١").is_err_and(|e| e.is_format()));
    }

    #[test]
    fn test_display_round_trip() {
        let mut d = date(1, 1, 1583);
        for _ in 0..3000 {
            let parsed: CivilDate = d.to_string().parse().unwrap();
            assert_eq!(parsed, d);
            d.add_days(7).unwrap();
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::Format("x".into()).to_string(),
            "Error parsing date: 'x'. Check formatting."
        );
        assert_eq!(
            DateError::InvalidYear(10000).to_string(),
            "Invalid year: 10000 (must be 1583-9999)"
        );
        assert_eq!(
            DateError::InvalidDay {
                day:   30,
                month: 2,
                year:  2023,
            }
            .to_string(),
            "Invalid day 30 for month 2023-02"
        );
    }

    #[test]
    fn test_try_from_tuple() {
        let d: CivilDate = (22, 12, 2001).try_into().unwrap();
        assert_eq!(d, date(22, 12, 2001));
        let result: Result<CivilDate, _> = (31, 4, 2001).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_components() {
        let (day, month, year) = date(9, 7, 2002).components().unwrap();
        assert_eq!((day.get(), month.get(), year.get()), (9, 7, 2002));
        assert!(CivilDate::UNSET.components().is_none());
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(22, 12, 2001);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""22-12-2001""#);
        let parsed: CivilDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let parsed: CivilDate = serde_json::from_str(r#""2001/12/22""#).unwrap();
        assert_eq!(parsed, d);
    }

    #[test]
    fn test_serde_sentinel_round_trip() {
        assert_eq!(CivilDate::UNSET.to_string(), UNSET_STR);
        let json = serde_json::to_string(&CivilDate::UNSET).unwrap();
        assert_eq!(json, r#""00-00-0""#);
        let parsed: CivilDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, CivilDate::UNSET);

        // Parsing proper still rejects the sentinel
        assert!(CivilDate::parse(UNSET_STR).is_err_and(|e| e.is_format()));
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<CivilDate, _> = serde_json::from_str(r#""30-02-2024""#);
        assert!(result.is_err());
        let result: Result<CivilDate, _> = serde_json::from_str(r#""2024-13""#);
        assert!(result.is_err());
    }
}
