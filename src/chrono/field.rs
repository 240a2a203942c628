//! The fields a date or time is made of, and the ranges they can take.

use crate::cal::datetime::{MAX_YEAR, MIN_YEAR, NANOS_IN_DAY};
use crate::error::Error;


/// A field of a date or time value.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum ChronoField {
    NanoOfSecond,
    NanoOfDay,
    SecondOfMinute,
    MinuteOfHour,
    HourOfDay,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    MonthOfYear,
    YearOfEra,
    Year,
    Era,
}

impl ChronoField {

    /// Returns the range this field takes in the ISO calendar system.
    ///
    /// Other calendar systems can narrow or widen these, so ask the
    /// chronology with `Chronology::range` when working with one.
    pub fn range(self) -> ValueRange {
        use self::ChronoField::*;

        match self {
            NanoOfSecond    => ValueRange::of(0, 999_999_999),
            NanoOfDay       => ValueRange::of(0, NANOS_IN_DAY - 1),
            SecondOfMinute  => ValueRange::of(0, 59),
            MinuteOfHour    => ValueRange::of(0, 59),
            HourOfDay       => ValueRange::of(0, 23),
            DayOfMonth      => ValueRange::of_variable(1, 28, 31),
            DayOfYear       => ValueRange::of_variable(1, 365, 366),
            EpochDay        => ValueRange::of(-365_243_219_162, 365_241_780_471),
            MonthOfYear     => ValueRange::of(1, 12),
            YearOfEra       => ValueRange::of_variable(1, MAX_YEAR, MAX_YEAR + 1),
            Year            => ValueRange::of(MIN_YEAR, MAX_YEAR),
            Era             => ValueRange::of(0, 1),
        }
    }
}


/// The range of values a field can take.
///
/// Some fields have a maximum that depends on the rest of the date: the
/// day of the month can go up to 28 in some months but 31 in others. For
/// these, `smallest_max` is the maximum in the shortest case and `max` is
/// the maximum in the longest.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct ValueRange {
    min: i64,
    smallest_max: i64,
    max: i64,
}

impl ValueRange {

    /// A range with one fixed minimum and one fixed maximum.
    pub fn of(min: i64, max: i64) -> Self {
        Self { min, smallest_max: max, max }
    }

    /// A range whose maximum lies somewhere between `smallest_max` and
    /// `max`, depending on context.
    pub fn of_variable(min: i64, smallest_max: i64, max: i64) -> Self {
        Self { min, smallest_max, max }
    }

    pub fn min(&self) -> i64 { self.min }
    pub fn smallest_max(&self) -> i64 { self.smallest_max }
    pub fn max(&self) -> i64 { self.max }

    /// Whether the maximum is the same in every context.
    pub fn is_fixed(&self) -> bool {
        self.smallest_max == self.max
    }

    /// Whether the value lies within the outer bounds of this range.
    pub fn is_valid_value(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns the value if it lies within the outer bounds of this range,
    /// or an error naming the field otherwise.
    pub fn check_valid_value(&self, value: i64, field: ChronoField) -> Result<i64, Error> {
        if self.is_valid_value(value) {
            Ok(value)
        }
        else {
            Err(Error::field(field, value))
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fixed() {
        assert!(ChronoField::MonthOfYear.range().is_fixed());
        assert!(!ChronoField::DayOfMonth.range().is_fixed());
    }

    #[test]
    fn check() {
        let range = ChronoField::MonthOfYear.range();
        assert_eq!(range.check_valid_value(12, ChronoField::MonthOfYear), Ok(12));
        assert_eq!(range.check_valid_value(13, ChronoField::MonthOfYear),
                   Err(Error::InvalidDateField { field: ChronoField::MonthOfYear, value: 13 }));
    }
}
