//! Dates, times, datetimes, months, and weekdays.

use std::cmp::{Ordering, PartialOrd};

use tracing::trace;

use crate::cal::{DatePiece, TimePiece};
use crate::chrono::ChronoField;
use crate::clock::Clock;
use crate::duration::NANOS_IN_SECOND;
use crate::error::Error;
use crate::instant::{Instant, SECONDS_IN_DAY};
use crate::math::safe_add;
use crate::util::{split_cycles, RangeExt};

use self::Month::*;
use self::Weekday::*;


/// The earliest proleptic year a date can have, in any calendar system.
pub const MIN_YEAR: i64 = -999_999_999;

/// The latest proleptic year a date can have, in any calendar system.
pub const MAX_YEAR: i64 = 999_999_999;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// Returns the number of days in this year.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        // This calculation is the reverse of LocalDate::from_days_since_epoch.
        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        // Standard leap-year calculations, performed on the remainder
        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of nanoseconds in a day.
pub(crate) const NANOS_IN_DAY: i64 = SECONDS_IN_DAY * NANOS_IN_SECOND;


/// Number of days between  **1st January, 1970** and **1st March, 2000**.
///
/// Having the reference point immediately after a possible leap-year day
/// makes the maths needed to calculate the day/week/month of a day count
/// come out a *lot* simpler: the Gregorian calendar operates on a 400-year
/// cycle, and with the leap day at the very end of one of these cycles, the
/// calculations are reduced to simple division.
///
/// Epoch days are still counted from 1970, so this value only shows up
/// inside `LocalDate`.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// This rather strange triangle is an array of the number of days elapsed
/// at the end of each month, starting at the beginning of March (the first
/// month after the EPOCH above), going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March



/// A **local date** is a day-long span on the timeline, *without a time
/// zone*, in the ISO-8601 proleptic Gregorian calendar.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    nanosecond: i32,
}

/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        YMD { year, month, day }
            .to_days_since_epoch()
            .map(|days| Self::from_days_since_epoch(days - EPOCH_DIFFERENCE))
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100).unwrap();
    /// assert_eq!(date.year(), 2015);
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    /// ```
    ///
    /// Remember that on leap years, the number of days in a year changes:
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2016, 268).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 24);  // not the 25th!
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        let jan_1 = YMD { year, month: January, day: 1 };
        let days = jan_1.to_days_since_epoch()?;

        if yearday.is_within(1 .. Year(year).day_count() as i64 + 1) {
            Ok(Self::from_days_since_epoch(days + yearday - 1 - EPOCH_DIFFERENCE))
        }
        else {
            Err(Error::field(ChronoField::DayOfYear, yearday))
        }
    }

    /// Creates the date that falls the given number of days after
    /// **1st January, 1970**.
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month};
    ///
    /// assert_eq!(LocalDate::from_epoch_day(0), LocalDate::ymd(1970, Month::January, 1));
    /// ```
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, Error> {
        let min = YMD { year: MIN_YEAR, month: January,  day:  1 }.to_days_since_epoch()?;
        let max = YMD { year: MAX_YEAR, month: December, day: 31 }.to_days_since_epoch()?;

        if epoch_day.is_within(min .. max + 1) {
            Ok(Self::from_days_since_epoch(epoch_day - EPOCH_DIFFERENCE))
        }
        else {
            Err(Error::field(ChronoField::EpochDay, epoch_day))
        }
    }

    /// Returns the number of days between **1st January, 1970** and this
    /// date.
    pub fn epoch_day(&self) -> i64 {
        self.ymd.days_since_epoch(Year(self.ymd.year).leap_year_calculations())
    }

    /// Returns the date the given number of days later (or earlier, if
    /// negative) than this one.
    pub fn plus_days(&self, days: i64) -> Result<Self, Error> {
        Self::from_epoch_day(safe_add(self.epoch_day(), days)?)
    }

    /// Computes a LocalDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since **1st March, 2000**.
    ///
    /// This is used by all the other constructor functions, which have
    /// already checked the range.
    fn from_days_since_epoch(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        //
        // This calculation works by finding the number of 400-year,
        // 100-year, and 4-year cycles, then constantly subtracting the
        // number of leftover days.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        // Calculate the numbers of 100-year cycles, 4-year cycles, and
        // leftover years, continually reducing the number of days left to
        // think about.
        // (The last day of a 400-year cycle is the 29th of February, which
        // belongs to the fourth 100-year cycle, not a fifth one.)
        let num_100y_cycles = std::cmp::min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;  // remainder is now days left in this year

        // Leap year calculation goes thusly:
        //
        // 1. If the year is a multiple of 400, it’s a leap year.
        // 2. Else, if the year is a multiple of 100, it’s *not* a leap year.
        // 3. Else, if the year is a multiple of 4, it’s a leap year again!
        //
        // We already have the values for the numbers of multiples at this
        // point, and it’s safe to re-use them.
        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // Find out which number day of the year it is.
        // The 306 here refers to the number of days in a year excluding
        // January and February (which are excluded because of the EPOCH)
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;  // wrap around for January and February
        }

        // Turn all those cycles into an actual number of years.
        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Work out the month and number of days into the month by scanning
        // the time triangle, finding the month that has the correct number
        // of days elapsed at the end of it.
        // (it’s “11 - index” below because the triangle goes backwards)
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s March.
        };

        // Need to add 2 to the month in order to compensate for the EPOCH
        // being in March.
        month += 2;

        if month >= 12 {
            years += 1;   // wrap around for January and February
            month -= 12;  // (yes, again)
        }

        // Finally, adjust the day numbers for human reasons: the first day
        // of the month is the 1st, rather than the 0th, and the year needs
        // to be adjusted relative to the EPOCH.
        Self {
            yearday: (day_of_year + 1) as i16,
            weekday: Weekday::from_epoch_day(days + EPOCH_DIFFERENCE),
            ymd: YMD {
                year:  years + 2000,
                month: Month::from_index(month),
                day:   (month_days + 1) as i8,
            },
        }
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


impl LocalTime {

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, nanosecond: 0 }
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields. The nanosecond field is set to 0.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_nano(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and nanosecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms_nano(hour: i8, minute: i8, second: i8, nanosecond: i32) -> Result<Self, Error> {
        if !hour.is_within(0..24) {
            Err(Error::field(ChronoField::HourOfDay, hour as i64))
        }
        else if !minute.is_within(0..60) {
            Err(Error::field(ChronoField::MinuteOfHour, minute as i64))
        }
        else if !second.is_within(0..60) {
            Err(Error::field(ChronoField::SecondOfMinute, second as i64))
        }
        else if !(nanosecond as i64).is_within(0..NANOS_IN_SECOND) {
            Err(Error::field(ChronoField::NanoOfSecond, nanosecond as i64))
        }
        else {
            Ok(Self { hour, minute, second, nanosecond })
        }
    }

    /// Computes the hour, minute, second and nanosecond, based on the
    /// number of nanoseconds that have elapsed since midnight.
    pub fn from_nanos_of_day(nanos: i64) -> Result<Self, Error> {
        if nanos.is_within(0..NANOS_IN_DAY) {
            Ok(Self::from_nanos_unchecked(nanos))
        }
        else {
            Err(Error::field(ChronoField::NanoOfDay, nanos))
        }
    }

    fn from_nanos_unchecked(nanos: i64) -> Self {
        let seconds = nanos / NANOS_IN_SECOND;
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            nanosecond: (nanos % NANOS_IN_SECOND) as i32,
        }
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring nanoseconds.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }

    /// Calculate the number of nanoseconds since midnight this time is at.
    pub fn to_nanos_of_day(self) -> i64 {
        self.to_seconds() * NANOS_IN_SECOND + self.nanosecond as i64
    }

    /// Returns the time the given number of nanoseconds later, wrapping
    /// around midnight in either direction.
    pub fn plus_nanos(self, nanos: i64) -> Self {
        let nanos = nanos.rem_euclid(NANOS_IN_DAY);
        Self::from_nanos_unchecked((self.to_nanos_of_day() + nanos) % NANOS_IN_DAY)
    }

    /// Returns the time the given number of seconds later, wrapping
    /// around midnight in either direction.
    pub fn plus_seconds(self, seconds: i64) -> Self {
        self.plus_nanos(seconds.rem_euclid(SECONDS_IN_DAY) * NANOS_IN_SECOND)
    }

    /// Returns the time the given number of minutes later, wrapping
    /// around midnight in either direction.
    pub fn plus_minutes(self, minutes: i64) -> Self {
        self.plus_seconds(minutes.rem_euclid(24 * 60) * 60)
    }

    /// Returns the time the given number of hours later, wrapping
    /// around midnight in either direction.
    pub fn plus_hours(self, hours: i64) -> Self {
        self.plus_seconds(hours.rem_euclid(24) * 3600)
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn nanosecond(&self) -> i32 { self.nanosecond }
}


impl LocalDateTime {

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self {
            date,
            time,
        }
    }

    /// Returns the date-time it is right now according to the given
    /// clock, read as UTC.
    ///
    /// ```rust
    /// use calendrical::{LocalDateTime, FixedClock, Instant, TimePiece};
    ///
    /// let clock = FixedClock(Instant::at(1_234_567_890));
    /// let now = LocalDateTime::now(&clock).unwrap();
    /// assert_eq!(now.hour(), 23);
    /// ```
    pub fn now<C: Clock + ?Sized>(clock: &C) -> Result<Self, Error> {
        let instant = clock.instant();
        trace!(seconds = instant.seconds(), "resolving current date-time");
        Self::from_instant(instant)
    }

    /// Splits an instant into the day it falls on and the time within
    /// that day.
    fn from_instant(instant: Instant) -> Result<Self, Error> {
        let date = LocalDate::from_epoch_day(instant.epoch_day())?;
        let seconds = split_cycles(instant.seconds(), SECONDS_IN_DAY).1;
        let time = LocalTime::from_nanos_unchecked(seconds * NANOS_IN_SECOND + instant.nanoseconds() as i64);
        Ok(Self { date, time })
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Returns the date-time the given number of nanoseconds later,
    /// carrying into the date when midnight is passed.
    pub fn plus_nanos(&self, nanos: i64) -> Result<Self, Error> {
        let (days, nanos) = split_cycles(nanos, NANOS_IN_DAY);
        self.plus_days_and_nanos(days, nanos)
    }

    /// Returns the date-time the given number of seconds later,
    /// carrying into the date when midnight is passed.
    pub fn plus_seconds(&self, seconds: i64) -> Result<Self, Error> {
        let (days, seconds) = split_cycles(seconds, SECONDS_IN_DAY);
        self.plus_days_and_nanos(days, seconds * NANOS_IN_SECOND)
    }

    /// Returns the date-time the given number of minutes later,
    /// carrying into the date when midnight is passed.
    pub fn plus_minutes(&self, minutes: i64) -> Result<Self, Error> {
        let (days, minutes) = split_cycles(minutes, 24 * 60);
        self.plus_days_and_nanos(days, minutes * 60 * NANOS_IN_SECOND)
    }

    /// Returns the date-time the given number of hours later,
    /// carrying into the date when midnight is passed.
    pub fn plus_hours(&self, hours: i64) -> Result<Self, Error> {
        let (days, hours) = split_cycles(hours, 24);
        self.plus_days_and_nanos(days, hours * 3600 * NANOS_IN_SECOND)
    }

    /// Moves forward by whole days plus a nanosecond amount that is less
    /// than one day.
    fn plus_days_and_nanos(&self, days: i64, nanos: i64) -> Result<Self, Error> {
        let (carry, nanos_of_day) = split_cycles(self.time.to_nanos_of_day() + nanos, NANOS_IN_DAY);
        Ok(Self {
            date: self.date.plus_days(safe_add(days, carry)?)?,
            time: LocalTime::from_nanos_unchecked(nanos_of_day),
        })
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn nanosecond(&self) -> i32 { self.time.nanosecond }
}


/// A **YMD** is an implementation detail of `LocalDate`. It provides
/// helper methods relating to the construction of `LocalDate` instances.
///
/// The main difference is that while all `LocalDate` values get checked
/// for validity before they are used, there is no such check for `YMD`.
/// The interface to `LocalDate` ensures that it should be impossible to
/// create an instance of the 74th of March, for example, but you’re
/// free to create such an instance of `YMD`. For this reason, it is not
/// exposed to implementors of this library.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970. Returns the number of days if this datestamp is
    /// valid; an error naming the bad field otherwise.
    ///
    /// This method returns a Result instead of exposing is_valid to
    /// the user, because the leap year calculations are used in both
    /// functions, so it makes more sense to only do them once.
    fn to_days_since_epoch(&self) -> Result<i64, Error> {
        if !self.year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
            return Err(Error::field(ChronoField::Year, self.year));
        }

        let leap_year_calculations = Year(self.year).leap_year_calculations();

        if !self.is_valid(leap_year_calculations.1) {
            return Err(Error::field(ChronoField::DayOfMonth, self.day as i64));
        }

        Ok(self.days_since_epoch(leap_year_calculations))
    }

    /// Does the counting for `to_days_since_epoch`, once the fields are
    /// known to be valid.
    fn days_since_epoch(&self, (leap_days_elapsed, is_leap_year): (i64, bool)) -> i64 {
        let years = self.year - 2000;

        // Work out the number of days from the start of 1970 to now,
        // which is a multiple of the number of years...
        years * 365

            // Plus the number of days between the start of 2000 and the
            // start of 1970, to make up the difference because our
            // dates start at 2000 and instants start at 1970...
            + 10958

            // Plus the number of leap years that have elapsed between
            // now and the start of 2000...
            + leap_days_elapsed

            // Plus the number of days in all the months leading up to
            // the current month...
            + self.month.days_before_start() as i64

            // Plus an extra leap day for *this* year...
            + if is_leap_year && self.month >= March { 1 } else { 0 }

            // Plus the number of days in the month so far! (Days are
            // 1-indexed, so we make them 0-indexed here)
            + (self.day - 1) as i64
    }

    /// Returns whether this datestamp is valid, which basically means
    /// whether the day is in the range allowed by the month.
    ///
    /// Whether the current year is a leap year should already have been
    /// calculated at this point, so the value is passed in rather than
    /// calculating it afresh.
    fn is_valid(&self, is_leap_year: bool) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(is_leap_year)
    }
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use calendrical::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1..13) {
            Ok(Self::from_index(month as usize - 1))
        }
        else {
            Err(Error::field(ChronoField::MonthOfYear, month as i64))
        }
    }

    /// Only ever called with an index already known to be in `0..12`.
    fn from_index(index: usize) -> Self {
        MONTHS[index]
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0. It’s an arbitrary choice; the only thing that depends
// on it is `Weekday::from_epoch_day`.
//
// Weekdays get no Ord instance because there’s no real standard as to
// whether Sunday should come before Monday, or the other way around.

static WEEKDAYS: &[Weekday] = &[
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

impl Weekday {

    /// Returns the weekday of the day the given number of days after
    /// **1st January, 1970**, in any calendar system.
    ///
    /// ```rust
    /// use calendrical::Weekday;
    /// assert_eq!(Weekday::from_epoch_day(0), Weekday::Thursday);
    /// ```
    pub fn from_epoch_day(epoch_day: i64) -> Self {
        // 1st January 1970 was a Thursday, so add 4 to the number of days.
        WEEKDAYS[(epoch_day.rem_euclid(7) + 4) as usize % 7]
    }
}
