use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CivilDate, DateError, MAX_YEAR, MIN_DAY, MIN_YEAR, REFERENCE_DATE, WEEKDAY_HEADER, Weekday, cyclic::MONTHS,
    math::{days_in_month, month_short_name},
};

/// The days of one month around a cursor date.
///
/// `dates` always holds every day of the cursor's month in order and is
/// rebuilt whenever the cursor moves. Navigation changes only the month and
/// year: the cursor day is kept as given, and `cursor` holds it clamped to
/// the current month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCalendar {
    day:    u8,
    cursor: CivilDate,
    dates:  Vec<CivilDate>,
}

/// One day in a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub day:       u8,
    pub is_cursor: bool,
}

/// A month laid out as Monday-first weeks. Cells before the 1st and after
/// the last day of the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub month: u8,
    pub year:  u16,
    pub rows:  Vec<[Option<GridCell>; 7]>,
}

impl MonthCalendar {
    /// A calendar for January of `MIN_YEAR`, cursor on the 1st.
    pub fn new() -> Self {
        let (day, month, year) = REFERENCE_DATE;
        Self::from_date(CivilDate::new(day, month, year))
    }

    /// A calendar with the cursor on the given date. Invalid components
    /// are ignored and the default calendar is returned.
    pub fn with_date(day: u8, month: u8, year: u16) -> Self {
        match CivilDate::try_new(day, month, year) {
            Ok(date) => Self::from_date(date),
            Err(err) => {
                debug!(day, month, year, %err, "ignoring invalid calendar date");
                Self::new()
            }
        }
    }

    /// A calendar for `month` of `year` with the cursor on the 1st.
    pub fn with_month(month: u8, year: u16) -> Self {
        Self::with_date(MIN_DAY, month, year)
    }

    /// A calendar around `date`; the sentinel gives the default calendar.
    pub fn from_date(date: CivilDate) -> Self {
        if !date.is_set() {
            return Self::new();
        }
        let mut calendar = Self {
            day:    date.day(),
            cursor: date,
            dates:  Vec::new(),
        };
        calendar.rebuild();
        calendar
    }

    /// Moves the cursor to the following month, keeping the cursor day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` and leaves the calendar unchanged in
    /// December of `MAX_YEAR`.
    pub fn next_month(&mut self) -> Result<(), DateError> {
        self.step(1)
    }

    /// Moves the cursor to the preceding month, keeping the cursor day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` and leaves the calendar unchanged in
    /// January of `MIN_YEAR`.
    pub fn prev_month(&mut self) -> Result<(), DateError> {
        self.step(-1)
    }

    fn step(&mut self, delta: i64) -> Result<(), DateError> {
        let (month, carry) = MONTHS.normalize(i64::from(self.current_month()) + delta);
        let year = u16::try_from(i64::from(self.current_year()) + carry)
            .ok()
            .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
            .ok_or(DateError::OutOfRange)
            .inspect_err(|_| debug!(cursor = %self.cursor, delta, "calendar navigation out of range"))?;
        let month = u8::try_from(month).map_err(|_| DateError::OutOfRange)?;

        self.cursor = CivilDate::try_new(self.day.min(days_in_month(year, month)), month, year)?;
        self.rebuild();
        Ok(())
    }

    fn rebuild(&mut self) {
        let (month, year) = (self.current_month(), self.current_year());
        self.dates = (MIN_DAY..=days_in_month(year, month))
            .map(|day| CivilDate::new(day, month, year))
            .collect();
    }

    /// The cursor day as constructed, which may exceed the current month.
    pub const fn current_day(&self) -> u8 {
        self.day
    }

    pub fn current_month(&self) -> u8 {
        self.cursor.month()
    }

    pub fn current_year(&self) -> u16 {
        self.cursor.year()
    }

    /// The cursor day clamped to the current month.
    pub const fn current_date(&self) -> CivilDate {
        self.cursor
    }

    pub fn is_leap_year(&self) -> bool {
        self.cursor.is_leap_year()
    }

    pub fn dates(&self) -> &[CivilDate] {
        &self.dates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CivilDate> {
        self.dates.iter()
    }

    /// Lays the month out as Monday-first weeks, flagging the cursor day.
    pub fn weeks(&self) -> MonthGrid {
        let lead = self
            .dates
            .first()
            .and_then(CivilDate::day_of_week)
            .map_or(0, Weekday::monday_offset);

        let mut rows = Vec::new();
        let mut row = [None; 7];
        let mut col = usize::from(lead);
        for date in &self.dates {
            row[col] = Some(GridCell {
                day:       date.day(),
                is_cursor: *date == self.cursor,
            });
            col += 1;
            if col == row.len() {
                rows.push(row);
                row = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            rows.push(row);
        }

        MonthGrid {
            month: self.current_month(),
            year: self.current_year(),
            rows,
        }
    }
}

impl Default for MonthCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CivilDate> for MonthCalendar {
    fn from(date: CivilDate) -> Self {
        Self::from_date(date)
    }
}

impl<'a> IntoIterator for &'a MonthCalendar {
    type Item = &'a CivilDate;
    type IntoIter = std::slice::Iter<'a, CivilDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MonthGrid {
    /// Renders a title line, the weekday header and one line per week.
    /// The cursor day is followed by `*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", month_short_name(self.month).unwrap_or_default(), self.year)?;
        write!(f, "\n{WEEKDAY_HEADER}")?;
        for row in &self.rows {
            let mut line = String::new();
            for cell in row {
                match cell {
                    Some(cell) => {
                        line.push_str(&format!("{:>2}", cell.day));
                        line.push(if cell.is_cursor { '*' } else { ' ' });
                    }
                    None => line.push_str("   "),
                }
            }
            write!(f, "\n{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl fmt::Display for MonthCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.weeks(), f)
    }
}
