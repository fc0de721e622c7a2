use thiserror::Error;

/// Errors raised by fraction arithmetic and continued fraction expansion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The divisor (or the denominator of a new fraction) is zero.
    #[error("divide by 0")]
    DivisionByZero,

    /// A magnitude doesn't fit in the signed counterpart of its type.
    #[error("magnitude overflows the signed integer type")]
    Overflow,

    /// The square root of a negative number was requested.
    #[error("cannot expand the square root of a negative number")]
    NegativeRadicand,

    /// An exact division that must hold by number theory didn't.
    #[error("{denom} does not divide {numer} exactly")]
    InvariantViolation { numer: String, denom: String },
}
