use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{CivilDate, DATE_SEPARATOR, DATE_SEPARATOR_SLASH, DateError, prelude::*};

/// Field order and separator used when rendering a [`FormattedDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[display(fmt = "DD-MM-YYYY")]
    DdMmYyyy,
    #[display(fmt = "MM-DD-YYYY")]
    MmDdYyyy,
    #[display(fmt = "YYYY-MM-DD")]
    YyyyMmDd,
    #[display(fmt = "YYYY-DD-MM")]
    YyyyDdMm,
    #[display(fmt = "DD/MM/YYYY")]
    DdMmYyyySlash,
    #[display(fmt = "MM/DD/YYYY")]
    MmDdYyyySlash,
    #[display(fmt = "YYYY/MM/DD")]
    YyyyMmDdSlash,
    #[display(fmt = "YYYY/DD/MM")]
    YyyyDdMmSlash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
    YearDayMonth,
}

impl DateFormat {
    pub const ALL: [Self; 8] = [
        Self::DdMmYyyy,
        Self::MmDdYyyy,
        Self::YyyyMmDd,
        Self::YyyyDdMm,
        Self::DdMmYyyySlash,
        Self::MmDdYyyySlash,
        Self::YyyyMmDdSlash,
        Self::YyyyDdMmSlash,
    ];

    pub const fn separator(self) -> char {
        self.layout().1
    }

    const fn layout(self) -> (FieldOrder, char) {
        match self {
            Self::DdMmYyyy => (FieldOrder::DayMonthYear, DATE_SEPARATOR),
            Self::MmDdYyyy => (FieldOrder::MonthDayYear, DATE_SEPARATOR),
            Self::YyyyMmDd => (FieldOrder::YearMonthDay, DATE_SEPARATOR),
            Self::YyyyDdMm => (FieldOrder::YearDayMonth, DATE_SEPARATOR),
            Self::DdMmYyyySlash => (FieldOrder::DayMonthYear, DATE_SEPARATOR_SLASH),
            Self::MmDdYyyySlash => (FieldOrder::MonthDayYear, DATE_SEPARATOR_SLASH),
            Self::YyyyMmDdSlash => (FieldOrder::YearMonthDay, DATE_SEPARATOR_SLASH),
            Self::YyyyDdMmSlash => (FieldOrder::YearDayMonth, DATE_SEPARATOR_SLASH),
        }
    }

    /// Renders `date` in this format. Day and month are zero-padded, the year is not.
    pub fn render(self, date: &CivilDate) -> String {
        let (day, month, year) = (date.day(), date.month(), date.year());
        let (order, sep) = self.layout();
        match order {
            FieldOrder::DayMonthYear => format!("{day:02}{sep}{month:02}{sep}{year}"),
            FieldOrder::MonthDayYear => format!("{month:02}{sep}{day:02}{sep}{year}"),
            FieldOrder::YearMonthDay => format!("{year}{sep}{month:02}{sep}{day:02}"),
            FieldOrder::YearDayMonth => format!("{year}{sep}{day:02}{sep}{month:02}"),
        }
    }
}

/// A [`CivilDate`] that remembers how it should be displayed.
///
/// Every query and mutation goes to the wrapped date. Only `Display`
/// depends on the format, so equality and ordering ignore it.
#[derive(Debug, Clone, Copy, Default, Deref, Serialize, Deserialize)]
pub struct FormattedDate {
    #[deref]
    date:   CivilDate,
    format: DateFormat,
}

impl FormattedDate {
    /// Creates a formatted date, falling back to the sentinel date on invalid components.
    pub fn new(day: u8, month: u8, year: u16, format: DateFormat) -> Self {
        Self::from_date(CivilDate::new(day, month, year), format)
    }

    /// # Errors
    /// Returns the validation error from [`CivilDate::try_new`].
    pub fn try_new(day: u8, month: u8, year: u16, format: DateFormat) -> Result<Self, DateError> {
        CivilDate::try_new(day, month, year).map(|date| Self::from_date(date, format))
    }

    /// Parses any layout accepted by [`CivilDate::parse`]; the input layout
    /// does not need to match `format`.
    ///
    /// # Errors
    /// Returns the error from [`CivilDate::parse`].
    pub fn parse(s: &str, format: DateFormat) -> Result<Self, DateError> {
        CivilDate::parse(s).map(|date| Self::from_date(date, format))
    }

    pub const fn from_date(date: CivilDate, format: DateFormat) -> Self {
        Self { date, format }
    }

    pub const fn date(&self) -> CivilDate {
        self.date
    }

    pub const fn format(&self) -> DateFormat {
        self.format
    }

    pub fn set_format(&mut self, format: DateFormat) {
        self.format = format;
    }

    /// # Errors
    /// See [`CivilDate::set_date`].
    pub fn set_date(&mut self, day: u8, month: u8, year: u16) -> Result<(), DateError> {
        self.date.set_date(day, month, year)
    }

    /// # Errors
    /// See [`CivilDate::add_days`].
    pub fn add_days(&mut self, days: i32) -> Result<(), DateError> {
        self.date.add_days(days)
    }

    /// # Errors
    /// See [`CivilDate::add_months`].
    pub fn add_months(&mut self, months: i32) -> Result<(), DateError> {
        self.date.add_months(months)
    }

    /// # Errors
    /// See [`CivilDate::add_years`].
    pub fn add_years(&mut self, years: i32) -> Result<(), DateError> {
        self.date.add_years(years)
    }
}

impl From<CivilDate> for FormattedDate {
    fn from(date: CivilDate) -> Self {
        Self::from_date(date, DateFormat::default())
    }
}

impl From<FormattedDate> for CivilDate {
    fn from(formatted: FormattedDate) -> Self {
        formatted.date
    }
}

impl fmt::Display for FormattedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format.render(&self.date))
    }
}

impl PartialEq for FormattedDate {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for FormattedDate {}

impl Hash for FormattedDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

impl PartialOrd for FormattedDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FormattedDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}
