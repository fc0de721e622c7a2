//! Exact rational arithmetic in sign-magnitude form, and continued fraction
//! expansion of square roots with big integer convergents.

mod cont_frac;
mod error;
mod fraction;
mod gcd;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use cont_frac::{convergent, expand_sqrt, Coefficients, ContinuedFraction, Convergents};
pub use error::Error;
pub use fraction::Fraction;
#[cfg(feature = "num-bigint")]
pub use fraction::BigFraction;
pub use gcd::{gcd, lcm};
pub use traits::{Approximation, FromSqrt};
