extern crate calendrical;
use calendrical::{Chronology, ChronoDate, ChronoField, Calendar, Era, Error, ValueRange};
use calendrical::{FixedClock, Instant, HijrahDate, LocalDate, Month, HIJRAH, ISO};


mod identity {
    use super::*;

    #[test]
    fn ids() {
        assert_eq!(ISO.id(), "ISO");
        assert_eq!(HIJRAH.id(), "Hijrah");
    }

    #[test]
    fn calendar_types() {
        assert_eq!(ISO.calendar_type(), "iso8601");
        assert_eq!(HIJRAH.calendar_type(), "islamicc");
    }

    #[test]
    fn lookup() {
        assert_eq!(Calendar::of("ISO"), Some(Calendar::Iso));
        assert_eq!(Calendar::of("iso8601"), Some(Calendar::Iso));
        assert_eq!(Calendar::of("islamicc"), Some(HIJRAH.calendar()));
        assert_eq!(Calendar::of("Coptic"), None);
    }
}


mod eras {
    use super::*;

    #[test]
    fn hijrah_eras() {
        assert_eq!(HIJRAH.eras(), &[Era::BeforeAh, Era::Ah]);
        assert_eq!(HIJRAH.era_of(1), Ok(Era::Ah));
        assert_eq!(HIJRAH.era_of(0), Ok(Era::BeforeAh));
        assert_eq!(HIJRAH.era_of(-1), Err(Error::InvalidEraValue(-1)));
    }

    #[test]
    fn proleptic_years() {
        assert_eq!(HIJRAH.proleptic_year(Era::Ah, 1445), Ok(1445));
        assert_eq!(HIJRAH.proleptic_year(Era::BeforeAh, 1), Ok(0));
        assert_eq!(HIJRAH.proleptic_year(Era::BeforeAh, 10), Ok(-9));
    }

    #[test]
    fn foreign_era() {
        assert_eq!(HIJRAH.proleptic_year(Era::Ce, 2024), Err(Error::InvalidEra));
        assert_eq!(HIJRAH.date(Era::Bce, 1, 1, 1), Err(Error::InvalidEra));
        assert_eq!(ISO.date_year_day(Era::Ah, 1445, 1), Err(Error::InvalidEra));
    }

    #[test]
    fn no_year_zero_in_an_era() {
        assert_eq!(HIJRAH.date(Era::Ah, 0, 1, 1),
                   Err(Error::InvalidDateField { field: ChronoField::YearOfEra, value: 0 }));
        assert_eq!(HIJRAH.date(Era::BeforeAh, 0, 1, 1),
                   Err(Error::InvalidDateField { field: ChronoField::YearOfEra, value: 0 }));
        assert_eq!(ISO.proleptic_year(Era::Ce, -5),
                   Err(Error::InvalidDateField { field: ChronoField::YearOfEra, value: -5 }));
    }

    #[test]
    fn era_and_year_come_back_unchanged() {
        for &(era, year_of_era) in [(Era::BeforeAh, 1), (Era::BeforeAh, 30), (Era::Ah, 1), (Era::Ah, 1445)].iter() {
            let date = HIJRAH.date(era, year_of_era, 1, 1).unwrap();
            assert_eq!(date.era(), era);
            assert_eq!(date.year_of_era(), year_of_era);
        }
    }

    #[test]
    fn era_of_dates() {
        let date = HIJRAH.date_ymd(1445, 9, 1).unwrap();
        assert_eq!(date.era(), Era::Ah);
        assert_eq!(date.year_of_era(), 1445);
        assert_eq!(date.calendar(), Calendar::Hijrah);
    }
}


mod now {
    use super::*;

    #[test]
    fn hijrah_today() {
        let clock = FixedClock(Instant::at(19793 * 86400 + 3600));
        assert_eq!(HIJRAH.date_now(&clock), HijrahDate::ymd(1445, 9, 1));
    }

    #[test]
    fn iso_today() {
        let clock = FixedClock(Instant::at(19793 * 86400 - 1));
        assert_eq!(ISO.date_now(&clock), LocalDate::ymd(2024, Month::March, 10));
    }
}


mod ranges {
    use super::*;

    #[test]
    fn day_of_month() {
        assert_eq!(HIJRAH.range(ChronoField::DayOfMonth), ValueRange::of_variable(1, 29, 30));
        assert_eq!(ISO.range(ChronoField::DayOfMonth), ValueRange::of_variable(1, 28, 31));
    }

    #[test]
    fn day_of_year() {
        assert_eq!(HIJRAH.range(ChronoField::DayOfYear).smallest_max(), 354);
        assert_eq!(ISO.range(ChronoField::DayOfYear).max(), 366);
    }

    #[test]
    fn shared() {
        assert_eq!(HIJRAH.range(ChronoField::MonthOfYear), ISO.range(ChronoField::MonthOfYear));
        assert!(HIJRAH.range(ChronoField::HourOfDay).is_fixed());
    }

    #[test]
    fn epoch_days_within_range() {
        let range = HIJRAH.range(ChronoField::EpochDay);
        assert!(HIJRAH.date_epoch_day(range.min()).is_ok());
        assert!(HIJRAH.date_epoch_day(range.max()).is_ok());
        assert_eq!(HIJRAH.date_epoch_day(range.min() - 1),
                   Err(Error::InvalidDateField { field: ChronoField::EpochDay, value: range.min() - 1 }));
    }
}
