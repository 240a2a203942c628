//! ISO-8601 renderings of dates and times for `Debug` output.

use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime};
use crate::util::RangeExt;


/// Writes a year-month-day triple the ISO-8601 way, with a sign and at
/// least five digits for years outside `0000 ..= 9999`.
pub(crate) fn write_ymd(f: &mut fmt::Formatter, year: i64, month: i8, day: i8) -> fmt::Result {
    if year.is_within(0 .. 10000) {
        write!(f, "{:04}-{:02}-{:02}", year, month, day)
    }
    else {
        write!(f, "{:+05}-{:02}-{:02}", year, month, day)
    }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate(")?;
        write_ymd(f, self.year(), self.month() as i8, self.day())?;
        write!(f, ")")
    }
}

fn write_hms<T: TimePiece>(f: &mut fmt::Formatter, time: &T) -> fmt::Result {
    write!(f, "{:02}:{:02}:{:02}.{:09}", time.hour(), time.minute(), time.second(), time.nanosecond())
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime(")?;
        write_hms(f, self)?;
        write!(f, ")")
    }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime(")?;
        write_ymd(f, self.year(), self.month() as i8, self.day())?;
        write!(f, "T")?;
        write_hms(f, self)?;
        write!(f, ")")
    }
}


#[cfg(test)]
mod test {
    use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month};

    #[test]
    fn recently() {
        let date = LocalDate::ymd(1600, Month::February, 28).unwrap();
        assert_eq!(format!("{:?}", date), "LocalDate(1600-02-28)");
    }

    #[test]
    fn just_then() {
        let date = LocalDate::ymd(-753, Month::December, 1).unwrap();
        assert_eq!(format!("{:?}", date), "LocalDate(-0753-12-01)");
    }

    #[test]
    fn far_far_future() {
        let date = LocalDate::ymd(10601, Month::January, 31).unwrap();
        assert_eq!(format!("{:?}", date), "LocalDate(+10601-01-31)");
    }

    #[test]
    fn midday() {
        let time = LocalTime::hms(12, 0, 0).unwrap();
        assert_eq!(format!("{:?}", time), "LocalTime(12:00:00.000000000)");
    }

    #[test]
    fn ascending() {
        let then = LocalDateTime::new(
                    LocalDate::ymd(2009, Month::February, 13).unwrap(),
                    LocalTime::hms(23, 31, 30).unwrap());
        assert_eq!(format!("{:?}", then), "LocalDateTime(2009-02-13T23:31:30.000000000)");
    }
}
