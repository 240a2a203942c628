//! Eras, and the calendar systems they belong to.

use crate::chrono::ChronoField;
use crate::error::Error;


/// One of the built-in calendar systems.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Calendar {

    /// The ISO-8601 proleptic Gregorian calendar.
    Iso,

    /// The tabular Hijrah calendar with its 30-year leap cycle.
    Hijrah,
}

impl Calendar {

    /// Looks up a calendar system by its ID or its LDML calendar type.
    ///
    /// ```rust
    /// use calendrical::Calendar;
    ///
    /// assert_eq!(Calendar::of("Hijrah"), Some(Calendar::Hijrah));
    /// assert_eq!(Calendar::of("islamicc"), Some(Calendar::Hijrah));
    /// assert_eq!(Calendar::of("Julian"), None);
    /// ```
    pub fn of(name: &str) -> Option<Self> {
        [Calendar::Iso, Calendar::Hijrah].iter()
            .find(|c| c.id() == name || c.calendar_type() == name)
            .copied()
    }

    /// The ID of the calendar system.
    pub fn id(self) -> &'static str {
        match self {
            Calendar::Iso     => "ISO",
            Calendar::Hijrah  => "Hijrah",
        }
    }

    /// The calendar type, as defined by the Unicode Locale Data Markup
    /// Language.
    pub fn calendar_type(self) -> &'static str {
        match self {
            Calendar::Iso     => "iso8601",
            Calendar::Hijrah  => "islamicc",
        }
    }

    /// The era that a proleptic year falls in. Year 1 and everything after
    /// is in the current era; year 0 and before are in the previous one.
    pub(crate) fn era_of_year(self, proleptic_year: i64) -> Era {
        match (self, proleptic_year >= 1) {
            (Calendar::Iso,    true)   => Era::Ce,
            (Calendar::Iso,    false)  => Era::Bce,
            (Calendar::Hijrah, true)   => Era::Ah,
            (Calendar::Hijrah, false)  => Era::BeforeAh,
        }
    }
}


/// An era of one of the built-in calendar systems.
///
/// Both systems split time into two eras, numbered 0 for the earlier one
/// and 1 for the current one.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Era {

    /// Before the Common Era (ISO, value 0).
    Bce,

    /// The Common Era (ISO, value 1).
    Ce,

    /// Before the Hijrah (value 0).
    BeforeAh,

    /// Anno Hegirae, the current Hijrah era (value 1).
    Ah,
}

impl Era {

    /// The numeric value of this era within its calendar system.
    pub fn value(self) -> i64 {
        match self {
            Era::Bce | Era::BeforeAh  => 0,
            Era::Ce  | Era::Ah        => 1,
        }
    }

    /// The calendar system this era belongs to.
    pub fn calendar(self) -> Calendar {
        match self {
            Era::Bce      | Era::Ce  => Calendar::Iso,
            Era::BeforeAh | Era::Ah  => Calendar::Hijrah,
        }
    }

    /// Converts a year of this era into a proleptic year: the current era
    /// counts up from 1, and the era before counts backwards from year 0.
    ///
    /// Years of an era start at 1 in both directions, so there is exactly
    /// one (era, year) pair for every proleptic year.
    pub(crate) fn proleptic_year(self, year_of_era: i64) -> Result<i64, Error> {
        let year_of_era = ChronoField::YearOfEra.range().check_valid_value(year_of_era, ChronoField::YearOfEra)?;

        if self.value() == 1 {
            Ok(year_of_era)
        }
        else {
            crate::math::safe_subtract(1, year_of_era)
        }
    }
}
