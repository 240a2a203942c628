#![crate_name = "calendrical"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for calendar systems and time-unit arithmetic.
//!
//! Dates can be built in the ISO calendar or in the tabular Hijrah
//! calendar, and converted between the two through their epoch day.
//! Amounts of nanoseconds up to half-days can be added to times and
//! date-times, and measured between them, without ever silently
//! overflowing.
//!
//! # Examples
//!
//! ```
//! use calendrical::{Chronology, ChronoDate, Era, HIJRAH, ISO};
//! use calendrical::{LocalDateTime, LocalTime, PeriodRules, PeriodUnit, TimeUnit};
//!
//! let hijrah = HIJRAH.date(Era::Ah, 1445, 9, 1).unwrap();
//! let iso = ISO.date_from(&hijrah).unwrap();
//! assert_eq!(iso.proleptic_year(), 2024);
//!
//! let start = LocalDateTime::new(iso, LocalTime::midnight());
//! let end = TimeUnit::Hours.rules().add_to_date_time(start, 36).unwrap();
//! assert_eq!(TimeUnit::HalfDays.rules().between_date_times(start, end), Ok(3));
//! ```

mod cal;
mod chrono;
mod clock;
mod duration;
mod error;
mod instant;
pub mod math;
mod system;
mod unit;
mod util;

pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Year, MIN_YEAR, MAX_YEAR};
pub use crate::chrono::{Calendar, ChronoDate, ChronoField, Chronology, EpochDay, Era, ValueRange};
pub use crate::chrono::{HijrahChronology, HijrahDate, IsoChronology, HIJRAH, ISO};
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::duration::Duration;
pub use crate::error::Error;
pub use crate::instant::Instant;
pub use crate::math::{safe_add, safe_multiply, safe_subtract};
pub use crate::unit::{PeriodRules, PeriodUnit, TimeRules, TimeUnit};
