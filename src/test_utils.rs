//! Construction helpers shared by the unit tests.

use crate::{CivilDate, ClockTime};

pub(crate) fn date(day: u8, month: u8, year: u16) -> CivilDate {
    CivilDate::try_new(day, month, year)
        .unwrap_or_else(|err| panic!("test date {day:02}-{month:02}-{year} is invalid: {err}"))
}

pub(crate) fn time(hour: u8, minute: u8, second: u8, millisecond: u16) -> ClockTime {
    ClockTime::try_new(hour, minute, second, millisecond).unwrap_or_else(|err| {
        panic!("test time {hour:02}:{minute:02}:{second:02}:{millisecond:03} is invalid: {err}")
    })
}
