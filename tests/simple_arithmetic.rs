extern crate calendrical;
use calendrical::{Instant, Duration};
use calendrical::{safe_add, safe_multiply, safe_subtract, Error};


#[test]
fn addition() {
    assert_eq!(Instant::at(10), Instant::at(3) + Duration::of(7))
}

#[test]
fn subtraction() {
    assert_eq!(Instant::at(20), Instant::at(50) - Duration::of(30))
}

#[test]
fn nanosecond_subtraction() {
    assert_eq!(Instant::at_nanos(19, 999_999_999), Instant::at(20) - Duration::of_nanos(1))
}

#[test]
fn safe_addition() {
    assert_eq!(safe_add(i64::max_value() - 1, 1), Ok(i64::max_value()));
    assert_eq!(safe_add(i64::max_value(), 1), Err(Error::ArithmeticOverflow));
}

#[test]
fn safe_subtraction() {
    assert_eq!(safe_subtract(i64::min_value() + 1, 1), Ok(i64::min_value()));
    assert_eq!(safe_subtract(i64::min_value(), 1), Err(Error::ArithmeticOverflow));
}

#[test]
fn safe_multiplication() {
    assert_eq!(safe_multiply(-3, 4), Ok(-12));
    assert_eq!(safe_multiply(i64::max_value() / 1000 + 1, 1000), Err(Error::ArithmeticOverflow));
    assert_eq!(safe_multiply(i64::min_value(), -1), Err(Error::ArithmeticOverflow));
}
