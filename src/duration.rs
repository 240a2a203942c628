//! Lengths of time on the timeline.

use std::ops::{Add, Sub};

use num_traits::{CheckedAdd, CheckedSub};

use crate::util::split_cycles;


/// Number of nanoseconds in one second.
pub(crate) const NANOS_IN_SECOND: i64 = 1_000_000_000;


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with nanosecond precision.
///
/// The nanosecond part is always kept within `0 .. 1_000_000_000`, so a
/// negative duration has a negative seconds part and a positive
/// nanosecond part.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Copy)]
pub struct Duration {
    seconds: i64,
    nanoseconds: i32,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, nanoseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Create a new duration that’s the given number of nanoseconds long.
    pub fn of_nanos(nanoseconds: i64) -> Self {
        let (seconds, nanoseconds) = split_cycles(nanoseconds, NANOS_IN_SECOND);
        Self { seconds, nanoseconds: nanoseconds as i32 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// nanoseconds long. Nanoseconds outside of one second get carried
    /// into the seconds part.
    ///
    /// # Panics
    ///
    /// Panics if that carry pushes the seconds part out of the range of
    /// `i64`.
    pub fn of_seconds_and_nanos(seconds: i64, nanoseconds: i64) -> Self {
        Self::of(seconds) + Self::of_nanos(nanoseconds)
    }

    /// Return the seconds and nanoseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i32) {
        (self.seconds, self.nanoseconds)
    }

    // Done as a tuple rather than separate seconds() and nanoseconds()
    // functions, so nobody mistakes the nanosecond portion for the *total*
    // length in nanoseconds.
}

impl Duration {

    /// Adds two durations, returning `None` if the seconds part would
    /// leave the range of `i64`.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let ns = self.nanoseconds + rhs.nanoseconds;
        let seconds = self.seconds.checked_add(rhs.seconds)?;
        if ns as i64 >= NANOS_IN_SECOND {
            Some(Self { seconds: seconds.checked_add(1)?, nanoseconds: ns - NANOS_IN_SECOND as i32 })
        }
        else {
            Some(Self { seconds, nanoseconds: ns })
        }
    }

    /// Subtracts one duration from another, returning `None` if the
    /// seconds part would leave the range of `i64`.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let ns = self.nanoseconds - rhs.nanoseconds;
        let seconds = self.seconds.checked_sub(rhs.seconds)?;
        if ns < 0 {
            Some(Self { seconds: seconds.checked_sub(1)?, nanoseconds: ns + NANOS_IN_SECOND as i32 })
        }
        else {
            Some(Self { seconds, nanoseconds: ns })
        }
    }
}

/// # Panics
///
/// Panics if the sum overflows, as `std::time::Duration` does. Use
/// `checked_add` where that can happen.
impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match Duration::checked_add(&self, &rhs) {
            Some(sum)  => sum,
            None       => panic!("overflow when adding durations"),
        }
    }
}

/// # Panics
///
/// Panics if the difference overflows, as `std::time::Duration` does.
/// Use `checked_sub` where that can happen.
impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match Duration::checked_sub(&self, &rhs) {
            Some(difference)  => difference,
            None              => panic!("overflow when subtracting durations"),
        }
    }
}

impl CheckedAdd for Duration {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Duration::checked_add(self, rhs)
    }
}

impl CheckedSub for Duration {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Duration::checked_sub(self, rhs)
    }
}
