//! The one error type shared by every calendrical operation.

use thiserror::Error as ThisError;

use crate::chrono::ChronoField;


/// Everything that can go wrong when building dates or scaling units.
///
/// None of these are transient: retrying the same call with the same
/// arguments will fail the same way.
#[derive(ThisError, PartialEq, Eq, Debug, Copy, Clone)]
pub enum Error {

    /// The era given belongs to a different calendar system than the one
    /// asked to interpret it.
    #[error("era does not belong to this calendar system")]
    InvalidEra,

    /// There is no era with this numeric value in the calendar system.
    #[error("invalid era value: {0}")]
    InvalidEraValue(i64),

    /// A date field was outside the range allowed for its year and month.
    #[error("invalid value for {field:?}: {value}")]
    InvalidDateField { field: ChronoField, value: i64 },

    /// Scaling or adding an amount would leave the range of `i64`.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    /// No time unit goes by the given name.
    #[error("unknown unit")]
    UnknownUnit,
}

impl Error {

    /// Shorthand for a rejected date field.
    pub(crate) fn field(field: ChronoField, value: i64) -> Self {
        Error::InvalidDateField { field, value }
    }
}
