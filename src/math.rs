//! Overflow-checked integer arithmetic.
//!
//! Every unit conversion that scales a caller-supplied amount goes through
//! these, so a large amount fails with `Error::ArithmeticOverflow` instead
//! of silently wrapping around.

use num_traits::{CheckedAdd, CheckedMul, CheckedSub};
use tracing::debug;

use crate::error::Error;


/// Adds two values, failing if the exact sum does not fit.
///
/// ### Examples
///
/// ```
/// use calendrical::math::safe_add;
///
/// assert_eq!(safe_add(40, 2), Ok(42));
/// assert!(safe_add(i64::max_value(), 1).is_err());
/// ```
pub fn safe_add(a: i64, b: i64) -> Result<i64, Error> {
    checked(CheckedAdd::checked_add(&a, &b), "add", a, b)
}

/// Subtracts `b` from `a`, failing if the exact difference does not fit.
pub fn safe_subtract(a: i64, b: i64) -> Result<i64, Error> {
    checked(CheckedSub::checked_sub(&a, &b), "subtract", a, b)
}

/// Multiplies two values, failing if the exact product does not fit.
///
/// ### Examples
///
/// ```
/// use calendrical::math::safe_multiply;
///
/// assert_eq!(safe_multiply(1000, 1000), Ok(1_000_000));
/// assert!(safe_multiply(i64::max_value(), 2).is_err());
/// ```
pub fn safe_multiply(a: i64, b: i64) -> Result<i64, Error> {
    checked(CheckedMul::checked_mul(&a, &b), "multiply", a, b)
}

fn checked(result: Option<i64>, operation: &'static str, a: i64, b: i64) -> Result<i64, Error> {
    result.ok_or_else(|| {
        debug!(operation = operation, lhs = a, rhs = b, "integer overflow");
        Error::ArithmeticOverflow
    })
}


#[cfg(test)]
mod test {
    use super::*;

    mod multiply {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(safe_multiply(1000, 1000), Ok(1_000_000));
        }

        #[test]
        fn negative() {
            assert_eq!(safe_multiply(-12, 3), Ok(-36));
        }

        #[test]
        fn overflow() {
            assert_eq!(safe_multiply(i64::max_value(), 2), Err(Error::ArithmeticOverflow));
        }

        #[test]
        fn min_times_minus_one() {
            assert_eq!(safe_multiply(i64::min_value(), -1), Err(Error::ArithmeticOverflow));
        }
    }

    mod add {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(safe_add(2, 8), Ok(10));
        }

        #[test]
        fn at_the_edge() {
            assert_eq!(safe_add(i64::max_value() - 1, 1), Ok(i64::max_value()));
        }

        #[test]
        fn overflow() {
            assert_eq!(safe_add(i64::max_value(), 1), Err(Error::ArithmeticOverflow));
        }
    }

    mod subtract {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(safe_subtract(28, 15), Ok(13));
        }

        #[test]
        fn underflow() {
            assert_eq!(safe_subtract(i64::min_value(), 1), Err(Error::ArithmeticOverflow));
        }
    }
}
