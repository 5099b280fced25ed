//! Bounded cyclic components.
//!
//! Months, hours, minutes, seconds and milliseconds all live in a fixed
//! inclusive range and carry into the next coarser unit when they leave it.
//! [`Cyclic`] captures that once so the date and clock types share the same
//! carry/borrow arithmetic.

use crate::consts::{
    HOURS_PER_DAY, JANUARY, MAX_MONTH, MILLIS_PER_SECOND, MINUTES_PER_HOUR, SECONDS_PER_MINUTE,
};

/// An inclusive range `min..=min + len - 1` that wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cyclic {
    min: i64,
    len: i64,
}

impl Cyclic {
    /// Creates a component spanning `min..=max`.
    pub(crate) const fn new(min: i64, max: i64) -> Self {
        debug_assert!(max >= min);
        Self {
            min,
            len: max - min + 1,
        }
    }

    pub(crate) const fn contains(self, value: i64) -> bool {
        value >= self.min && value < self.min + self.len
    }

    /// Brings `value` back into range.
    ///
    /// Returns the normalized value and the carry into the next unit: positive
    /// when `value` overflowed, negative when it underflowed.
    pub(crate) const fn normalize(self, value: i64) -> (i64, i64) {
        let offset = value - self.min;
        (
            self.min + offset.rem_euclid(self.len),
            offset.div_euclid(self.len),
        )
    }
}

pub(crate) const MONTHS: Cyclic = Cyclic::new(JANUARY as i64, MAX_MONTH as i64);
pub(crate) const HOURS: Cyclic = Cyclic::new(0, HOURS_PER_DAY - 1);
pub(crate) const MINUTES: Cyclic = Cyclic::new(0, MINUTES_PER_HOUR - 1);
pub(crate) const SECONDS: Cyclic = Cyclic::new(0, SECONDS_PER_MINUTE - 1);
pub(crate) const MILLISECONDS: Cyclic = Cyclic::new(0, MILLIS_PER_SECOND - 1);
