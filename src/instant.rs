//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};

use crate::duration::Duration;
use crate::util::split_cycles;


/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// Internally, this is a count of seconds since the Unix epoch plus the
/// nanosecond of that second, so it shares its representation with
/// `Duration`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    since_epoch: Duration,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self { since_epoch: Duration::of(seconds) }
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of nanoseconds so far this
    /// second. Nanoseconds outside of one second are carried.
    ///
    /// # Panics
    ///
    /// Panics if that carry pushes the seconds out of the range of `i64`.
    pub fn at_nanos(seconds: i64, nanoseconds: i64) -> Self {
        Self { since_epoch: Duration::of_seconds_and_nanos(seconds, nanoseconds) }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.since_epoch.lengths().0
    }

    /// Returns the number of nanoseconds into the current second
    pub fn nanoseconds(&self) -> i32 {
        self.since_epoch.lengths().1
    }

    /// Returns the number of whole days since 1st January 1970 that this
    /// instant falls on, rounding towards the past.
    pub fn epoch_day(&self) -> i64 {
        split_cycles(self.seconds(), SECONDS_IN_DAY).0
    }
}

impl Instant {

    /// Returns the instant the given duration later, or `None` if that
    /// falls outside the range this type can hold.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.since_epoch.checked_add(&duration).map(|since_epoch| Self { since_epoch })
    }

    /// Returns the instant the given duration earlier, or `None` if that
    /// falls outside the range this type can hold.
    pub fn checked_sub(&self, duration: Duration) -> Option<Self> {
        self.since_epoch.checked_sub(&duration).map(|since_epoch| Self { since_epoch })
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds(), self.nanoseconds())
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self { since_epoch: self.since_epoch + duration }
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self { since_epoch: self.since_epoch - duration }
    }
}
