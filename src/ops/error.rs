//! Error type for arithmetic operations.

use thiserror::Error;

/// Errors returned by the fallible operations in [`crate::ops`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The divisor of [`crate::ops::divide`] was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The exact result does not fit in the result type.
    #[error("{operation} overflowed")]
    Overflow { operation: &'static str },
}
