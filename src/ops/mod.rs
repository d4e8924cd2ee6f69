//! Arithmetic operations.
//!
//! Every function here is pure: no shared state, no I/O beyond `tracing`
//! events. Integer operations work on `i64` and wrap on overflow, so only
//! [`divide`] (zero divisor) and [`factorial`] (result too large) can fail.

pub mod error;

use tracing::{debug, warn};

pub use error::ArithmeticError;

/// Add two numbers and return the sum.
pub fn add(a: i64, b: i64) -> i64 {
    debug!(a, b, "performing addition");
    a.wrapping_add(b)
}

/// Subtract `b` from `a`.
pub fn subtract(a: i64, b: i64) -> i64 {
    debug!(a, b, "performing subtraction");
    a.wrapping_sub(b)
}

/// Multiply two numbers and return the product.
pub fn multiply(a: i64, b: i64) -> i64 {
    debug!(a, b, "performing multiplication");
    a.wrapping_mul(b)
}

/// Divide `a` by `b`, truncating toward zero.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero.
pub fn divide(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    debug!(a, b, "performing division");
    if b == 0 {
        warn!(a, "division by zero rejected");
        return Err(ArithmeticError::DivisionByZero);
    }
    // i64::MIN / -1 is the only overflowing case; it wraps back to i64::MIN.
    Ok(a.wrapping_div(b))
}

/// Raise `base` to an integer `exponent`.
///
/// The exponent is widened to `f64` and handed to the native `pow`, so
/// results match it bit for bit. Negative exponents yield the reciprocal
/// power. Edge cases such as `0^0` or infinite bases follow native `f64`
/// semantics.
pub fn power(base: f64, exponent: i32) -> f64 {
    debug!(base, exponent, "performing exponentiation");
    base.powf(f64::from(exponent))
}

/// Compute `n!`.
///
/// `0!` and `1!` are both 1.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] when the result exceeds `u64::MAX`
/// (any `n` above 20).
pub fn factorial(n: u32) -> Result<u64, ArithmeticError> {
    debug!(n, "computing factorial");
    (2..=u64::from(n)).try_fold(1u64, |acc, k| {
        acc.checked_mul(k).ok_or(ArithmeticError::Overflow {
            operation: "factorial",
        })
    })
}
