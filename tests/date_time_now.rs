extern crate calendrical;
use calendrical::{LocalDateTime, LocalDate, LocalTime, Month, Instant, Error, ChronoField};
use calendrical::{Clock, FixedClock, SystemClock, DatePiece, TimePiece};


#[test]
fn first_moment_of_1970() {
    let now = LocalDateTime::now(&FixedClock(Instant::at_epoch())).unwrap();
    assert_eq!(now, LocalDateTime::new(LocalDate::ymd(1970, Month::January, 1).unwrap(), LocalTime::midnight()));
}

#[test]
fn nanoseconds_are_kept() {
    let now = LocalDateTime::now(&FixedClock(Instant::at_nanos(19793 * 86_400 + 45_296, 789))).unwrap();
    assert_eq!(now.date(), LocalDate::ymd(2024, Month::March, 11).unwrap());
    assert_eq!(now.time(), LocalTime::hms_nano(12, 34, 56, 789).unwrap());
}

#[test]
fn last_second_of_a_leap_year() {
    let now = LocalDateTime::now(&FixedClock(Instant::at(1_483_228_799))).unwrap();
    assert_eq!((now.year(), now.month(), now.day()), (2016, Month::December, 31));
    assert_eq!((now.hour(), now.minute(), now.second()), (23, 59, 59));
    assert_eq!(now.yearday(), 366);
}

#[test]
fn a_second_before_the_epoch() {
    let now = LocalDateTime::now(&FixedClock(Instant::at(-1))).unwrap();
    assert_eq!(now.date(), LocalDate::ymd(1969, Month::December, 31).unwrap());
    assert_eq!(now.time(), LocalTime::hms(23, 59, 59).unwrap());
}

#[test]
fn long_before_the_epoch() {
    let now = LocalDateTime::now(&FixedClock(Instant::at(-62_135_596_800))).unwrap();
    assert_eq!(now.date(), LocalDate::ymd(1, Month::January, 1).unwrap());
    assert_eq!(now.time(), LocalTime::midnight());
}

#[test]
fn agrees_with_the_clock_day() {
    let clock = FixedClock(Instant::at(1_700_000_000));
    let now = LocalDateTime::now(&clock).unwrap();
    assert_eq!(now.date().epoch_day(), clock.epoch_day());
}

#[test]
fn clock_beyond_the_last_year() {
    let clock = FixedClock(Instant::at(i64::max_value()));
    assert_eq!(LocalDateTime::now(&clock),
               Err(Error::InvalidDateField { field: ChronoField::EpochDay, value: clock.epoch_day() }));
}

#[test]
fn system_clock() {
    // Any time since this was written will do.
    let now = LocalDateTime::now(&SystemClock).unwrap();
    assert!(now.year() >= 2024);
}
