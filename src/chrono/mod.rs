//! Calendar systems, and converting their dates to and from epoch days.
//!
//! Every calendar system is a stateless value implementing `Chronology`.
//! The built-in ones are available as the `ISO` and `HIJRAH` statics, and
//! can be shared freely between threads.
//!
//! Dates from different systems meet at the **epoch day**, the number of
//! days since 1st January 1970 (ISO), so converting between them is a
//! matter of asking one chronology for the date at another date’s epoch
//! day:
//!
//! ```rust
//! use calendrical::{Chronology, ChronoDate, LocalDate, Month, HIJRAH};
//!
//! let date = LocalDate::ymd(2024, Month::March, 11).unwrap();
//! let hijrah = HIJRAH.date_from(&date).unwrap();
//!
//! assert_eq!(hijrah.proleptic_year(), 1445);
//! assert_eq!(hijrah.month_value(), 9);
//! assert_eq!(hijrah.day_of_month(), 1);
//! ```

use std::fmt;

use tracing::trace;

use crate::cal::datetime::Weekday;
use crate::clock::Clock;
use crate::error::Error;

mod era;
mod field;
mod hijrah;
mod iso;

pub use self::era::{Calendar, Era};
pub use self::field::{ChronoField, ValueRange};
pub use self::hijrah::{HijrahChronology, HijrahDate, HIJRAH};
pub use self::iso::{IsoChronology, ISO};


/// Anything that falls on a single day.
pub trait EpochDay {

    /// Returns the number of days between **1st January, 1970** and this
    /// value’s day.
    fn epoch_day(&self) -> i64;
}


/// A date in some calendar system.
pub trait ChronoDate: EpochDay + fmt::Debug + Copy + Ord {

    /// The calendar system this date belongs to.
    fn calendar(&self) -> Calendar;

    /// The year, counted continuously across eras.
    fn proleptic_year(&self) -> i64;

    /// The month of the year, starting from 1.
    fn month_value(&self) -> i8;

    /// The day of the month, starting from 1.
    fn day_of_month(&self) -> i8;

    /// The day of the year, starting from 1.
    fn day_of_year(&self) -> i16;

    /// Whether this date’s year is a leap year in its calendar system.
    fn is_leap_year(&self) -> bool;

    /// The number of days in this date’s month.
    fn length_of_month(&self) -> i8;

    /// The number of days in this date’s year.
    fn length_of_year(&self) -> i16;

    /// The era this date falls in.
    fn era(&self) -> Era {
        self.calendar().era_of_year(self.proleptic_year())
    }

    /// The year, counted within the date’s era.
    fn year_of_era(&self) -> i64 {
        let year = self.proleptic_year();
        if year >= 1 { year } else { 1 - year }
    }

    /// The day of the week. This is the same in every calendar system.
    fn day_of_week(&self) -> Weekday {
        Weekday::from_epoch_day(self.epoch_day())
    }
}


/// A calendar system.
///
/// Implementors only hold behaviour, never state, and every operation
/// returns a new date rather than changing anything.
pub trait Chronology: fmt::Debug + Send + Sync {

    /// The type of date this calendar system produces.
    type Date: ChronoDate;

    /// Which of the built-in calendar systems this is.
    fn calendar(&self) -> Calendar;

    /// The ID of this calendar system, such as `Hijrah`.
    fn id(&self) -> &'static str {
        self.calendar().id()
    }

    /// The LDML calendar type of this calendar system, such as `islamicc`.
    fn calendar_type(&self) -> &'static str {
        self.calendar().calendar_type()
    }

    /// Creates a date from a proleptic year, month, and day.
    fn date_ymd(&self, proleptic_year: i64, month: i8, day: i8) -> Result<Self::Date, Error>;

    /// Creates a date from an era, year of that era, month, and day.
    fn date(&self, era: Era, year_of_era: i64, month: i8, day: i8) -> Result<Self::Date, Error> {
        let year = self.proleptic_year(era, year_of_era)?;
        self.date_ymd(year, month, day)
    }

    /// Creates a date from a proleptic year and the day of that year.
    fn date_yd(&self, proleptic_year: i64, day_of_year: i64) -> Result<Self::Date, Error>;

    /// Creates a date from an era, year of that era, and day of that year.
    fn date_year_day(&self, era: Era, year_of_era: i64, day_of_year: i64) -> Result<Self::Date, Error> {
        let year = self.proleptic_year(era, year_of_era)?;
        self.date_yd(year, day_of_year)
    }

    /// Creates the date that falls on the given epoch day.
    fn date_epoch_day(&self, epoch_day: i64) -> Result<Self::Date, Error>;

    /// Creates the date that falls on the same day as the given value,
    /// which can come from any calendar system.
    fn date_from<T: EpochDay + ?Sized>(&self, value: &T) -> Result<Self::Date, Error> {
        self.date_epoch_day(value.epoch_day())
    }

    /// Creates the date it is today, according to the given clock.
    fn date_now<C: Clock + ?Sized>(&self, clock: &C) -> Result<Self::Date, Error> {
        let epoch_day = clock.epoch_day();
        trace!(calendar = self.id(), epoch_day = epoch_day, "resolving current date");
        self.date_epoch_day(epoch_day)
    }

    /// Whether the given proleptic year is a leap year.
    fn is_leap_year(&self, proleptic_year: i64) -> bool;

    /// Converts a year of the given era into a proleptic year.
    ///
    /// Fails with `Error::InvalidEra` if the era belongs to another
    /// calendar system, and with an `InvalidDateField` error if the year
    /// of the era is below 1.
    fn proleptic_year(&self, era: Era, year_of_era: i64) -> Result<i64, Error> {
        if era.calendar() != self.calendar() {
            return Err(Error::InvalidEra);
        }

        era.proleptic_year(year_of_era)
    }

    /// Returns the era with the given numeric value.
    fn era_of(&self, value: i64) -> Result<Era, Error> {
        self.eras().iter()
            .find(|era| era.value() == value)
            .copied()
            .ok_or(Error::InvalidEraValue(value))
    }

    /// Returns every era of this calendar system, earliest first.
    fn eras(&self) -> &'static [Era];

    /// Returns the range of values a field can take in this calendar system.
    fn range(&self, field: ChronoField) -> ValueRange;
}
