//! The tabular Hijrah calendar.
//!
//! This is the arithmetical, civil form of the Islamic calendar: rather
//! than following sightings of the moon, it repeats the same pattern of
//! month and year lengths forever.
//!
//! - A year has 12 months.
//! - Odd-numbered months have 30 days and even-numbered months have 29,
//!   except that the 12th month has 30 days in a leap year.
//! - Time is divided into cycles of 30 years, and years 2, 5, 7, 10, 13,
//!   16, 18, 21, 24, 26, and 29 of each cycle are leap years.
//! - This makes each cycle exactly 10631 days long.
//!
//! The first day of the first year is the 16th of July, 622, in the Julian
//! calendar (the 19th, in the proleptic Gregorian calendar).

use std::fmt;

use crate::cal::datetime::{MAX_YEAR, MIN_YEAR};
use crate::cal::fmt::write_ymd;
use crate::chrono::{Calendar, ChronoDate, ChronoField, Chronology, EpochDay, Era, ValueRange};
use crate::error::Error;
use crate::math::safe_add;
use crate::util::{split_cycles, RangeExt};


/// Number of years in one leap cycle.
const YEARS_IN_CYCLE: i64 = 30;

/// Number of days in one leap cycle: 30 years of 354 days, plus one day
/// for each of the 11 leap years.
const DAYS_IN_CYCLE: i64 = 30 * 354 + 11;

/// The positions within a cycle of the years that get a leap day, with
/// the 30th year of a cycle being position 0.
const LEAP_YEARS: [i64; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// The number of days elapsed in a cycle before each of its years begins.
/// The first entry is the first year of the cycle.
const CYCLE_YEAR_STARTS: [i64; 30] = [
        0,   354,   709,  1063,  1417,  1772,  2126,  2481,  2835,  3189,
     3544,  3898,  4252,  4607,  4961,  5315,  5670,  6024,  6379,  6733,
     7087,  7442,  7796,  8150,  8505,  8859,  9214,  9568,  9922, 10277,
];

/// The epoch day of the 1st of Muharram, 1 AH.
const HIJRAH_EPOCH_DAY: i64 = -492_148;


/// Returns whether the given proleptic year is a leap year, which depends
/// only on its position in its 30-year cycle.
///
/// ```rust
/// use calendrical::{Chronology, HIJRAH};
///
/// assert!(HIJRAH.is_leap_year(1445));
/// assert!(!HIJRAH.is_leap_year(1446));
/// assert!(HIJRAH.is_leap_year(-1));
/// ```
pub(crate) fn is_leap_year(proleptic_year: i64) -> bool {
    LEAP_YEARS.contains(&proleptic_year.rem_euclid(YEARS_IN_CYCLE))
}

/// Returns the number of days in the given month of a year.
fn days_in_month(month: i8, leap_year: bool) -> i8 {
    match month {
        12                   => if leap_year { 30 } else { 29 },
        m if m % 2 == 1      => 30,
        _                    => 29,
    }
}

/// Returns the number of days in a year before the given month begins.
/// Months alternate between 30 and 29 days, starting with 30.
fn days_before_month(month: i8) -> i64 {
    let elapsed = month as i64 - 1;
    29 * elapsed + (elapsed + 1) / 2
}

/// Converts valid year, month, and day fields into an epoch day.
///
/// This counts the days in the whole cycles before the year, then the
/// days in the years of its own cycle before it, then the months and days
/// within the year.
fn epoch_day_from_fields(year: i64, month: i8, day: i8) -> i64 {
    let (cycles, year_in_cycle) = split_cycles(year - 1, YEARS_IN_CYCLE);

    cycles * DAYS_IN_CYCLE
        + CYCLE_YEAR_STARTS[year_in_cycle as usize]
        + days_before_month(month)
        + (day - 1) as i64
        + HIJRAH_EPOCH_DAY
}

/// Converts an epoch day into year, month, and day fields. This is the
/// exact reverse of `epoch_day_from_fields`.
fn fields_from_epoch_day(epoch_day: i64) -> (i64, i8, i8) {
    let (cycles, day_in_cycle) = split_cycles(epoch_day - HIJRAH_EPOCH_DAY, DAYS_IN_CYCLE);

    // Scan backwards for the last year that starts on or before this day.
    // There’s always one, as the first year starts at day 0.
    let year_in_cycle = CYCLE_YEAR_STARTS.iter()
                                         .rposition(|start| *start <= day_in_cycle)
                                         .unwrap_or(0);

    let day_in_year = day_in_cycle - CYCLE_YEAR_STARTS[year_in_cycle];

    // Same again for months; in a leap year, the 355th day lands on the
    // 30th of the 12th month.
    let month = (1 ..= 12).rev()
                          .find(|m| days_before_month(*m) <= day_in_year)
                          .unwrap_or(1);

    let year = cycles * YEARS_IN_CYCLE + year_in_cycle as i64 + 1;
    (year, month, (day_in_year - days_before_month(month) + 1) as i8)
}


/// A date in the Hijrah calendar system.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct HijrahDate {
    year:  i64,
    month: i8,
    day:   i8,
}

impl HijrahDate {

    /// Creates a new Hijrah date from the given proleptic year, month, and
    /// day fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ```rust
    /// use calendrical::HijrahDate;
    ///
    /// assert!(HijrahDate::ymd(1445, 12, 30).is_ok());  // leap year
    /// assert!(HijrahDate::ymd(1446, 12, 30).is_err());
    /// assert!(HijrahDate::ymd(1446, 13, 1).is_err());
    /// ```
    pub fn ymd(year: i64, month: i8, day: i8) -> Result<Self, Error> {
        let _ = ChronoField::Year.range().check_valid_value(year, ChronoField::Year)?;
        let _ = ChronoField::MonthOfYear.range().check_valid_value(month as i64, ChronoField::MonthOfYear)?;

        if day.is_within(1 .. days_in_month(month, is_leap_year(year)) + 1) {
            Ok(Self { year, month, day })
        }
        else {
            Err(Error::field(ChronoField::DayOfMonth, day as i64))
        }
    }

    /// Creates the Hijrah date that falls the given number of days after
    /// **1st January, 1970** (ISO).
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, Error> {
        let range = epoch_day_range();
        let _ = range.check_valid_value(epoch_day, ChronoField::EpochDay)?;

        let (year, month, day) = fields_from_epoch_day(epoch_day);
        Ok(Self { year, month, day })
    }

    /// Returns the number of days between **1st January, 1970** (ISO) and
    /// this date.
    pub fn epoch_day(&self) -> i64 {
        epoch_day_from_fields(self.year, self.month, self.day)
    }

    /// Returns the date the given number of days later (or earlier, if
    /// negative) than this one.
    pub fn plus_days(&self, days: i64) -> Result<Self, Error> {
        Self::from_epoch_day(safe_add(self.epoch_day(), days)?)
    }

    /// The proleptic year.
    pub fn year(&self) -> i64 { self.year }

    /// The month of the year, from 1 to 12.
    pub fn month(&self) -> i8 { self.month }

    /// The day of the month, from 1 to 30.
    pub fn day(&self) -> i8 { self.day }
}

/// The first and last epoch days that a Hijrah date can fall on.
fn epoch_day_range() -> ValueRange {
    ValueRange::of(epoch_day_from_fields(MIN_YEAR, 1, 1),
                   epoch_day_from_fields(MAX_YEAR, 12, days_in_month(12, is_leap_year(MAX_YEAR))))
}

impl EpochDay for HijrahDate {
    fn epoch_day(&self) -> i64 {
        HijrahDate::epoch_day(self)
    }
}

impl ChronoDate for HijrahDate {
    fn calendar(&self) -> Calendar { Calendar::Hijrah }
    fn proleptic_year(&self) -> i64 { self.year }
    fn month_value(&self) -> i8 { self.month }
    fn day_of_month(&self) -> i8 { self.day }
    fn is_leap_year(&self) -> bool { is_leap_year(self.year) }
    fn length_of_month(&self) -> i8 { days_in_month(self.month, is_leap_year(self.year)) }
    fn length_of_year(&self) -> i16 { if is_leap_year(self.year) { 355 } else { 354 } }

    fn day_of_year(&self) -> i16 {
        (days_before_month(self.month) + self.day as i64) as i16
    }
}

impl fmt::Debug for HijrahDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HijrahDate(")?;
        write_ymd(f, self.year, self.month, self.day)?;
        write!(f, ")")
    }
}


/// The Hijrah calendar system.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct HijrahChronology;

/// The Hijrah chronology.
pub static HIJRAH: HijrahChronology = HijrahChronology;

static ERAS: &[Era] = &[Era::BeforeAh, Era::Ah];

impl Chronology for HijrahChronology {
    type Date = HijrahDate;

    fn calendar(&self) -> Calendar {
        Calendar::Hijrah
    }

    fn date_ymd(&self, proleptic_year: i64, month: i8, day: i8) -> Result<HijrahDate, Error> {
        HijrahDate::ymd(proleptic_year, month, day)
    }

    fn date_yd(&self, proleptic_year: i64, day_of_year: i64) -> Result<HijrahDate, Error> {
        let first = HijrahDate::ymd(proleptic_year, 1, 1)?;

        if day_of_year.is_within(1 .. first.length_of_year() as i64 + 1) {
            first.plus_days(day_of_year - 1)
        }
        else {
            Err(Error::field(ChronoField::DayOfYear, day_of_year))
        }
    }

    fn date_epoch_day(&self, epoch_day: i64) -> Result<HijrahDate, Error> {
        HijrahDate::from_epoch_day(epoch_day)
    }

    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        is_leap_year(proleptic_year)
    }

    fn eras(&self) -> &'static [Era] {
        ERAS
    }

    fn range(&self, field: ChronoField) -> ValueRange {
        match field {
            ChronoField::DayOfMonth  => ValueRange::of_variable(1, 29, 30),
            ChronoField::DayOfYear   => ValueRange::of_variable(1, 354, 355),
            ChronoField::EpochDay    => epoch_day_range(),
            other                    => other.range(),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cycle_table_matches_leap_years() {
        let mut start = 0;
        for (year_in_cycle, expected) in CYCLE_YEAR_STARTS.iter().enumerate() {
            assert_eq!(start, *expected);
            start += if is_leap_year(year_in_cycle as i64 + 1) { 355 } else { 354 };
        }
        assert_eq!(start, DAYS_IN_CYCLE);
    }

    #[test]
    fn cycle_sums_to_10631_days() {
        let total: i64 = (1 ..= 30)
            .flat_map(|year| (1 ..= 12).map(move |month| days_in_month(month, is_leap_year(year)) as i64))
            .sum();
        assert_eq!(total, 10631);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(1, false), 30);
        assert_eq!(days_in_month(2, false), 29);
        assert_eq!(days_in_month(11, false), 30);
        assert_eq!(days_in_month(12, false), 29);
        assert_eq!(days_in_month(12, true), 30);
    }

    #[test]
    fn months_before() {
        assert_eq!(days_before_month(1), 0);
        assert_eq!(days_before_month(2), 30);
        assert_eq!(days_before_month(3), 59);
        assert_eq!(days_before_month(12), 325);
    }

    #[test]
    fn epoch() {
        assert_eq!(epoch_day_from_fields(1, 1, 1), HIJRAH_EPOCH_DAY);
        assert_eq!(fields_from_epoch_day(HIJRAH_EPOCH_DAY), (1, 1, 1));
        assert_eq!(fields_from_epoch_day(HIJRAH_EPOCH_DAY - 1), (0, 12, 29));
    }

    #[test]
    fn last_day_of_leap_year() {
        let day = epoch_day_from_fields(1445, 12, 30);
        assert_eq!(fields_from_epoch_day(day), (1445, 12, 30));
        assert_eq!(fields_from_epoch_day(day + 1), (1446, 1, 1));
    }

    #[test]
    fn round_trips_across_the_origin() {
        for epoch_day in HIJRAH_EPOCH_DAY - 3 * DAYS_IN_CYCLE .. HIJRAH_EPOCH_DAY + 3 * DAYS_IN_CYCLE {
            let (year, month, day) = fields_from_epoch_day(epoch_day);
            assert_eq!(epoch_day_from_fields(year, month, day), epoch_day);
        }
    }

    #[test]
    fn leap_years_either_side_of_zero() {
        for year in -60 ..= 60 {
            let position = ((year % 30) + 30) % 30;
            assert_eq!(is_leap_year(year), LEAP_YEARS.contains(&position), "year {}", year);
        }
    }

    #[test]
    fn range_of_epoch_days() {
        let range = HIJRAH.range(ChronoField::EpochDay);
        assert_eq!(range.min(), -354_367_158_815);
        assert_eq!(range.max(), 354_366_174_163);
        assert!(HijrahDate::from_epoch_day(range.max() + 1).is_err());
        assert!(HijrahDate::from_epoch_day(range.min()).is_ok());
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", HijrahDate::ymd(1445, 9, 1).unwrap()), "HijrahDate(1445-09-01)");
        assert_eq!(format!("{:?}", HijrahDate::ymd(-4, 1, 1).unwrap()), "HijrahDate(-0004-01-01)");
    }
}
