//! The ISO calendar system, as a chronology.

use crate::cal::DatePiece;
use crate::cal::datetime::{LocalDate, LocalDateTime, Month, Year};
use crate::chrono::{Calendar, ChronoDate, ChronoField, Chronology, EpochDay, Era, ValueRange};
use crate::error::Error;
use crate::instant::Instant;


/// The ISO-8601 calendar system: the proleptic Gregorian calendar, with
/// its rules applied to every year including those before 1582.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct IsoChronology;

/// The ISO chronology.
pub static ISO: IsoChronology = IsoChronology;

static ERAS: &[Era] = &[Era::Bce, Era::Ce];

impl Chronology for IsoChronology {
    type Date = LocalDate;

    fn calendar(&self) -> Calendar {
        Calendar::Iso
    }

    fn date_ymd(&self, proleptic_year: i64, month: i8, day: i8) -> Result<LocalDate, Error> {
        LocalDate::ymd(proleptic_year, Month::from_one(month)?, day)
    }

    fn date_yd(&self, proleptic_year: i64, day_of_year: i64) -> Result<LocalDate, Error> {
        LocalDate::yd(proleptic_year, day_of_year)
    }

    fn date_epoch_day(&self, epoch_day: i64) -> Result<LocalDate, Error> {
        LocalDate::from_epoch_day(epoch_day)
    }

    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        Year(proleptic_year).is_leap_year()
    }

    fn eras(&self) -> &'static [Era] {
        ERAS
    }

    fn range(&self, field: ChronoField) -> ValueRange {
        field.range()
    }
}


impl EpochDay for LocalDate {
    fn epoch_day(&self) -> i64 {
        LocalDate::epoch_day(self)
    }
}

impl EpochDay for LocalDateTime {
    fn epoch_day(&self) -> i64 {
        self.date().epoch_day()
    }
}

impl EpochDay for Instant {
    fn epoch_day(&self) -> i64 {
        Instant::epoch_day(self)
    }
}

impl ChronoDate for LocalDate {
    fn calendar(&self) -> Calendar { Calendar::Iso }
    fn proleptic_year(&self) -> i64 { self.year() }
    fn month_value(&self) -> i8 { self.month() as i8 }
    fn day_of_month(&self) -> i8 { self.day() }
    fn day_of_year(&self) -> i16 { self.yearday() }
    fn is_leap_year(&self) -> bool { Year(self.year()).is_leap_year() }
    fn length_of_month(&self) -> i8 { self.month().days_in_month(ChronoDate::is_leap_year(self)) }
    fn length_of_year(&self) -> i16 { Year(self.year()).day_count() }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn era_years() {
        assert_eq!(ISO.proleptic_year(Era::Bce, 5), Ok(-4));
        assert_eq!(ISO.proleptic_year(Era::Ce, 2024), Ok(2024));
    }

    #[test]
    fn hijrah_era_is_rejected() {
        assert_eq!(ISO.proleptic_year(Era::Ah, 5), Err(Error::InvalidEra));
        assert_eq!(ISO.date(Era::BeforeAh, 5, 1, 1), Err(Error::InvalidEra));
    }

    #[test]
    fn date_before_common_era() {
        let date = ISO.date(Era::Bce, 1, 12, 31).unwrap();
        assert_eq!(date.year(), 0);
        assert_eq!(date.era(), Era::Bce);
        assert_eq!(date.year_of_era(), 1);
    }

    #[test]
    fn bad_month() {
        assert_eq!(ISO.date_ymd(2024, 13, 1), Err(Error::InvalidDateField { field: ChronoField::MonthOfYear, value: 13 }));
    }

    #[test]
    fn year_day() {
        assert_eq!(ISO.date_yd(2016, 366), LocalDate::ymd(2016, Month::December, 31));
        assert!(ISO.date_yd(2015, 366).is_err());
        assert!(ISO.date_yd(2015, 0).is_err());
    }

    #[test]
    fn now() {
        let clock = FixedClock(Instant::at(1_234_567_890));
        assert_eq!(ISO.date_now(&clock), LocalDate::ymd(2009, Month::February, 13));
    }

    #[test]
    fn eras() {
        assert_eq!(ISO.era_of(0), Ok(Era::Bce));
        assert_eq!(ISO.era_of(1), Ok(Era::Ce));
        assert_eq!(ISO.era_of(2), Err(Error::InvalidEraValue(2)));
        assert_eq!(ISO.eras(), &[Era::Bce, Era::Ce]);
    }

    #[test]
    fn lengths() {
        let date = LocalDate::ymd(2000, Month::February, 1).unwrap();
        assert_eq!(date.length_of_month(), 29);
        assert_eq!(date.length_of_year(), 366);
    }
}
