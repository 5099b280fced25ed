use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::Timelike;
use regex::Regex;
use tracing::debug;

use crate::{
    MAX_HOUR, MAX_MILLISECOND, MAX_MINUTE, MAX_SECOND, MILLIS_PER_DAY, MILLIS_PER_SECOND,
    MINUTES_PER_HOUR, SECONDS_PER_MINUTE,
    cyclic::{HOURS, MILLISECONDS, MINUTES, SECONDS},
    pattern,
    prelude::*,
};

/// A time of day with millisecond precision.
///
/// Like [`crate::CivilDate`], invalid numeric components passed to
/// [`ClockTime::new`] leave the all-zero value (midnight) rather than an error.
#[derive(Debug, Clone, Copy, Default, Display)]
#[display(
    fmt = "{:02}:{:02}:{:02}:{:03}",
    "hour",
    "minute",
    "second",
    "millisecond"
)]
pub struct ClockTime {
    hour:        u8,
    minute:      u8,
    second:      u8,
    millisecond: u16,
}

/// Errors produced by time construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The input is not of the form `HH:MM:SS:MMM`.
    #[error("Error parsing time: '{0}'. Check formatting.")]
    Format(String),

    /// Well-formed components outside the clock's range.
    #[error("Invalid time {hour:02}:{minute:02}:{second:02}:{millisecond:03}")]
    InvalidTime {
        hour:        u8,
        minute:      u8,
        second:      u8,
        millisecond: u16,
    },
}

impl TimeError {
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    pub const fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidTime { .. })
    }
}

static TIME_LAYOUT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^([0-9]{2}):([0-9]{2}):([0-9]{2}):([0-9]{3})$"));

impl ClockTime {
    /// Midnight, also used as the fallback for invalid components.
    pub const MIDNIGHT: Self = Self {
        hour:        0,
        minute:      0,
        second:      0,
        millisecond: 0,
    };

    /// Creates a time, falling back to midnight when a component is out of range.
    pub fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        Self::try_new(hour, minute, second, millisecond).unwrap_or_else(|err| {
            debug!(%err, "invalid time components, using sentinel");
            Self::MIDNIGHT
        })
    }

    /// Creates a time, rejecting out-of-range components.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidTime` if any component is out of range.
    pub fn try_new(hour: u8, minute: u8, second: u8, millisecond: u16) -> Result<Self, TimeError> {
        if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_SECOND || millisecond > MAX_MILLISECOND {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
                millisecond,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Parses `HH:MM:SS:MMM`.
    ///
    /// # Errors
    /// Returns `TimeError::Format` if the layout does not match, or
    /// `TimeError::InvalidTime` if a component is out of range.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let caps = TIME_LAYOUT
            .captures(s)
            .ok_or_else(|| TimeError::Format(s.to_owned()))?;
        let (_, [h, m, sec, ms]) = caps.extract();

        let number = |field: &str| field.parse::<u16>().map_err(|_| TimeError::Format(s.to_owned()));
        let narrow = |v: u16| u8::try_from(v).map_err(|_| TimeError::Format(s.to_owned()));

        Self::try_new(
            narrow(number(h)?)?,
            narrow(number(m)?)?,
            narrow(number(sec)?)?,
            number(ms)?,
        )
    }

    /// Time of day `ms` milliseconds after midnight, wrapping at whole days.
    pub fn from_milliseconds(ms: i64) -> Self {
        let mut time = Self::MIDNIGHT;
        time.carry_milliseconds(ms.rem_euclid(MILLIS_PER_DAY));
        time
    }

    /// The current local wall-clock time.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        // A leap second reports more than 999ms
        let millis = (now.nanosecond() / 1_000_000).min(u32::from(MAX_MILLISECOND));
        Self::new(
            component(i64::from(now.hour())),
            component(i64::from(now.minute())),
            component(i64::from(now.second())),
            component(i64::from(millis)),
        )
    }

    pub fn set_to_current_time(&mut self) {
        *self = Self::now();
    }

    /// Replaces the time.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidTime` and leaves the time unchanged if any
    /// component is out of range.
    pub fn set_time(&mut self, hour: u8, minute: u8, second: u8, millisecond: u16) -> Result<(), TimeError> {
        *self = Self::try_new(hour, minute, second, millisecond)?;
        Ok(())
    }

    /// Adds hours, wrapping around midnight.
    pub fn add_hours(&mut self, hours: i32) {
        self.carry_hours(i64::from(hours));
    }

    pub fn add_minutes(&mut self, minutes: i32) {
        self.carry_minutes(i64::from(minutes));
    }

    pub fn add_seconds(&mut self, seconds: i32) {
        self.carry_seconds(i64::from(seconds));
    }

    /// Adds milliseconds. Overflow carries through every coarser unit and
    /// finally wraps the hour.
    pub fn add_milliseconds(&mut self, milliseconds: i32) {
        self.carry_milliseconds(i64::from(milliseconds));
    }

    fn carry_hours(&mut self, delta: i64) {
        // No day component: the carry out of the hour is dropped
        let (hour, _) = HOURS.normalize(i64::from(self.hour) + delta);
        self.hour = component(hour);
    }

    fn carry_minutes(&mut self, delta: i64) {
        let (minute, carry) = MINUTES.normalize(i64::from(self.minute) + delta);
        self.minute = component(minute);
        if carry != 0 {
            self.carry_hours(carry);
        }
    }

    fn carry_seconds(&mut self, delta: i64) {
        let (second, carry) = SECONDS.normalize(i64::from(self.second) + delta);
        self.second = component(second);
        if carry != 0 {
            self.carry_minutes(carry);
        }
    }

    fn carry_milliseconds(&mut self, delta: i64) {
        let (millisecond, carry) = MILLISECONDS.normalize(i64::from(self.millisecond) + delta);
        self.millisecond = component(millisecond);
        if carry != 0 {
            self.carry_seconds(carry);
        }
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }

    /// Milliseconds since midnight.
    pub fn total_milliseconds(&self) -> i64 {
        ((i64::from(self.hour) * MINUTES_PER_HOUR + i64::from(self.minute)) * SECONDS_PER_MINUTE
            + i64::from(self.second))
            * MILLIS_PER_SECOND
            + i64::from(self.millisecond)
    }
}

/// Narrows a value already normalized into a component's range.
fn component<T: TryFrom<i64> + Default>(value: i64) -> T {
    T::try_from(value).unwrap_or_default()
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for ClockTime {
    fn eq(&self, other: &Self) -> bool {
        self.total_milliseconds() == other.total_milliseconds()
    }
}

impl Eq for ClockTime {}

impl Hash for ClockTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_milliseconds().hash(state);
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_milliseconds().cmp(&other.total_milliseconds())
    }
}

impl serde::Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
