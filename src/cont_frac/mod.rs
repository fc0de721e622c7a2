//! Data structures and algorithms implementations related to
//! simple continued fractions
//!
//! 1. [ContinuedFraction][ContinuedFraction] represents a simple continued fraction with limited length or periodic
//! 2. [expand_sqrt] computes the periodic expansion of a square root
//! 3. [convergent] folds a finite prefix of coefficients back into a fraction
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>
//!

mod block;
mod simple;
mod sqrt;

pub use simple::*;
pub use sqrt::*;
