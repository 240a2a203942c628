extern crate calendrical;
use calendrical::{LocalDate, Month, Chronology, ChronoDate, HijrahDate, Era, HIJRAH};
use calendrical::DatePiece;


#[test]
fn day_start_of_year() {
    let date = LocalDate::yd(2015, 1).unwrap();
    assert_eq!(2015, date.year());
    assert_eq!(Month::January, date.month());
    assert_eq!(1, date.day());
}


#[test]
fn from_yearday() {
    for date in vec![
        LocalDate::ymd(1970, Month::from_one( 1).unwrap(),  1).unwrap(),
        LocalDate::ymd(1971, Month::from_one( 1).unwrap(),  1).unwrap(),
        LocalDate::ymd(1973, Month::from_one( 1).unwrap(),  1).unwrap(),
        LocalDate::ymd(1977, Month::from_one( 1).unwrap(),  1).unwrap(),
        LocalDate::ymd(1989, Month::from_one(11).unwrap(), 10).unwrap(),
        LocalDate::ymd(1990, Month::from_one( 7).unwrap(),  8).unwrap(),
        LocalDate::ymd(2014, Month::from_one( 7).unwrap(), 13).unwrap(),
        LocalDate::ymd(2001, Month::from_one( 2).unwrap(),  3).unwrap(),
    ]{
        let new_date = LocalDate::yd(date.year(), date.yearday() as i64).unwrap();
        assert_eq!(new_date, date);
        assert_eq!(new_date.yearday(), date.yearday());
    }
}


#[test]
fn hijrah_day_start_of_year() {
    let date = HIJRAH.date_yd(1445, 1).unwrap();
    assert_eq!(date, HijrahDate::ymd(1445, 1, 1).unwrap());
}


#[test]
fn hijrah_second_month() {
    let date = HIJRAH.date_yd(1445, 31).unwrap();
    assert_eq!(date, HijrahDate::ymd(1445, 2, 1).unwrap());
}


#[test]
fn hijrah_last_day_of_leap_year() {
    let date = HIJRAH.date_yd(1445, 355).unwrap();
    assert_eq!(date, HijrahDate::ymd(1445, 12, 30).unwrap());
    assert_eq!(date.day_of_year(), 355);
}


#[test]
fn hijrah_too_many_days() {
    assert!(HIJRAH.date_yd(1446, 355).is_err());
    assert!(HIJRAH.date_yd(1446, 0).is_err());
}


#[test]
fn hijrah_by_era() {
    let date = HIJRAH.date_year_day(Era::BeforeAh, 2, 1).unwrap();
    assert_eq!(date.proleptic_year(), -1);
    assert_eq!(date.year_of_era(), 2);
    assert_eq!(date.era(), Era::BeforeAh);
}


#[test]
fn hijrah_day_of_year_round_trip() {
    for year in 1440 .. 1450 {
        let length = HIJRAH.date_ymd(year, 1, 1).unwrap().length_of_year() as i64;
        for day in 1 ..= length {
            assert_eq!(HIJRAH.date_yd(year, day).unwrap().day_of_year() as i64, day);
        }
    }
}
