//! Units of time, and the arithmetic they do on dates and times.
//!
//! Each `TimeUnit` is a fixed granularity from one nanosecond up to half a
//! day. Its rules can add an amount of that unit to a date, a time, or a
//! date-time, and measure how many whole units lie between two of them.
//!
//! ```rust
//! use calendrical::{LocalTime, PeriodRules, PeriodUnit, TimeUnit, TimePiece};
//!
//! let time = LocalTime::hms(23, 0, 0).unwrap();
//! let later = TimeUnit::Hours.rules().add_to_time(time, 2).unwrap();
//! assert_eq!(later.hour(), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::cal::datetime::{LocalDate, LocalDateTime, LocalTime, NANOS_IN_DAY};
use crate::duration::{Duration, NANOS_IN_SECOND};
use crate::error::Error;
use crate::math::{safe_add, safe_multiply};


/// A unit of time that amounts can be measured in.
pub trait PeriodUnit {

    /// The rules this unit does its arithmetic with.
    type Rules: PeriodRules;

    /// The name of this unit, such as `Hours`.
    fn name(&self) -> &'static str;

    /// How long one of this unit lasts. This is only a description of the
    /// unit; the arithmetic itself is done by the rules.
    fn duration(&self) -> Duration;

    /// The rules for adding and measuring amounts of this unit.
    fn rules(&self) -> Self::Rules;
}


/// Adding amounts of a unit to date and time values, and measuring the
/// amount of a unit between two of them.
///
/// Nothing here modifies its arguments: every method returns a new value.
pub trait PeriodRules {

    /// Adds an amount of this unit to a date.
    fn add_to_date(&self, date: LocalDate, amount: i64) -> LocalDate;

    /// Adds an amount of this unit to a time of day, wrapping around
    /// midnight in either direction.
    fn add_to_time(&self, time: LocalTime, amount: i64) -> Result<LocalTime, Error>;

    /// Adds an amount of this unit to a date-time, carrying into the date
    /// whenever midnight is passed.
    fn add_to_date_time(&self, date_time: LocalDateTime, amount: i64) -> Result<LocalDateTime, Error>;

    /// The number of whole units from one date to another.
    fn between_dates(&self, start: LocalDate, end: LocalDate) -> Result<i64, Error>;

    /// The number of whole units from one time of day to another.
    fn between_times(&self, start: LocalTime, end: LocalTime) -> Result<i64, Error>;

    /// The number of whole units from one date-time to another.
    fn between_date_times(&self, start: LocalDateTime, end: LocalDateTime) -> Result<i64, Error>;
}


/// The units of time shorter than one day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
}

impl TimeUnit {

    /// Every unit, shortest first.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Nanos, TimeUnit::Micros, TimeUnit::Millis, TimeUnit::Seconds,
        TimeUnit::Minutes, TimeUnit::Hours, TimeUnit::HalfDays,
    ];

    /// The number of nanoseconds in one of this unit.
    fn nanos(self) -> i64 {
        match self {
            TimeUnit::Nanos     => 1,
            TimeUnit::Micros    => 1_000,
            TimeUnit::Millis    => 1_000_000,
            TimeUnit::Seconds   => NANOS_IN_SECOND,
            TimeUnit::Minutes   => NANOS_IN_SECOND * 60,
            TimeUnit::Hours     => NANOS_IN_SECOND * 60 * 60,
            TimeUnit::HalfDays  => NANOS_IN_SECOND * 60 * 60 * 12,
        }
    }

    /// The number of this unit in one day. Every unit divides a day
    /// exactly.
    fn per_day(self) -> i64 {
        NANOS_IN_DAY / self.nanos()
    }
}

impl PeriodUnit for TimeUnit {
    type Rules = TimeRules;

    fn name(&self) -> &'static str {
        match *self {
            TimeUnit::Nanos     => "Nanos",
            TimeUnit::Micros    => "Micros",
            TimeUnit::Millis    => "Millis",
            TimeUnit::Seconds   => "Seconds",
            TimeUnit::Minutes   => "Minutes",
            TimeUnit::Hours     => "Hours",
            TimeUnit::HalfDays  => "HalfDays",
        }
    }

    fn duration(&self) -> Duration {
        match *self {
            TimeUnit::Nanos     => Duration::of_nanos(1),
            TimeUnit::Micros    => Duration::of_nanos(1_000),
            TimeUnit::Millis    => Duration::of_nanos(1_000_000),
            TimeUnit::Seconds   => Duration::of(1),
            TimeUnit::Minutes   => Duration::of(60),
            TimeUnit::Hours     => Duration::of(60 * 60),
            TimeUnit::HalfDays  => Duration::of(12 * 60 * 60),
        }
    }

    fn rules(&self) -> TimeRules {
        TimeRules { unit: *self }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        Self::ALL.iter()
            .find(|unit| unit.name() == input)
            .copied()
            .ok_or(Error::UnknownUnit)
    }
}


/// The rules of one of the `TimeUnit`s.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct TimeRules {
    unit: TimeUnit,
}

impl TimeRules {

    /// Counts whole units in a span of days plus nanoseconds. A span that
    /// isn’t a whole number of units gets truncated towards zero.
    fn count(&self, days: i64, nanos: i64) -> Result<i64, Error> {

        // Give both parts the same sign, so that truncating the
        // nanoseconds truncates the whole span.
        let (days, nanos) = if days > 0 && nanos < 0 {
            (days - 1, nanos + NANOS_IN_DAY)
        }
        else if days < 0 && nanos > 0 {
            (days + 1, nanos - NANOS_IN_DAY)
        }
        else {
            (days, nanos)
        };

        safe_add(safe_multiply(days, self.unit.per_day())?, nanos / self.unit.nanos())
    }
}

impl PeriodRules for TimeRules {

    /// Returns the date unchanged.
    ///
    /// A date has no time of day for a sub-day amount to move, and a date
    /// only changes when whole days pass, so the date stays where it is
    /// no matter how large the amount. Use `add_to_date_time` to have the
    /// amount roll over into the date.
    fn add_to_date(&self, date: LocalDate, _amount: i64) -> LocalDate {
        date
    }

    fn add_to_time(&self, time: LocalTime, amount: i64) -> Result<LocalTime, Error> {
        Ok(match self.unit {
            TimeUnit::Nanos     => time.plus_nanos(amount),
            TimeUnit::Micros    => time.plus_nanos(safe_multiply(amount, 1_000)?),
            TimeUnit::Millis    => time.plus_nanos(safe_multiply(amount, 1_000_000)?),
            TimeUnit::Seconds   => time.plus_seconds(amount),
            TimeUnit::Minutes   => time.plus_minutes(amount),
            TimeUnit::Hours     => time.plus_hours(amount),
            TimeUnit::HalfDays  => time.plus_hours(safe_multiply(amount, 12)?),
        })
    }

    fn add_to_date_time(&self, date_time: LocalDateTime, amount: i64) -> Result<LocalDateTime, Error> {
        match self.unit {
            TimeUnit::Nanos     => date_time.plus_nanos(amount),
            TimeUnit::Micros    => date_time.plus_nanos(safe_multiply(amount, 1_000)?),
            TimeUnit::Millis    => date_time.plus_nanos(safe_multiply(amount, 1_000_000)?),
            TimeUnit::Seconds   => date_time.plus_seconds(amount),
            TimeUnit::Minutes   => date_time.plus_minutes(amount),
            TimeUnit::Hours     => date_time.plus_hours(amount),
            TimeUnit::HalfDays  => date_time.plus_hours(safe_multiply(amount, 12)?),
        }
    }

    fn between_dates(&self, start: LocalDate, end: LocalDate) -> Result<i64, Error> {
        safe_multiply(end.epoch_day() - start.epoch_day(), self.unit.per_day())
    }

    fn between_times(&self, start: LocalTime, end: LocalTime) -> Result<i64, Error> {
        self.count(0, end.to_nanos_of_day() - start.to_nanos_of_day())
    }

    fn between_date_times(&self, start: LocalDateTime, end: LocalDateTime) -> Result<i64, Error> {
        let days = end.date().epoch_day() - start.date().epoch_day();
        let nanos = end.time().to_nanos_of_day() - start.time().to_nanos_of_day();
        self.count(days, nanos)
    }
}
