//! Periodic continued fraction expansion of square roots.
//!
//! Every complete quotient of `√n` has the form `(√n + m) / d` with integers
//! `m` and `d`. By Lagrange's theorem the pairs `(m, d)` eventually repeat,
//! and for `√n` the repetition starts right after `a0`.
//!
//! # References:
//! - <http://www.numbertheory.org/courses/MP313/lectures/lecture17/page5.html>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>

use super::simple::ContinuedFraction;
use crate::error::Error;
use crate::traits::{FromSqrt, WithUnsigned};
use log::{debug, error, trace};
use num_integer::{sqrt, Integer, Roots};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

/// Returns `numer / denom`, which must divide exactly
fn reduce_exact<T: Integer + Display>(numer: &T, denom: &T) -> Result<T, Error> {
    let (quo, rem) = numer.div_rem(denom);
    if rem.is_zero() {
        Ok(quo)
    } else {
        Err(Error::InvariantViolation {
            numer: numer.to_string(),
            denom: denom.to_string(),
        })
    }
}

/// Expand `√n` into `(a0, period)`, so that `√n = [a0; period, period, ..]`.
/// The period is empty if `n` is a perfect square.
///
/// # Panics
/// Panics if `n` is negative, or if an exact division required by the
/// theory of quadratic irrationals fails, which means the integer type
/// itself is broken.
pub fn expand_sqrt<T: Integer + Roots + Clone + Hash + Display>(n: &T) -> (T, Vec<T>) {
    let a0 = sqrt(n.clone());
    if a0.clone() * a0.clone() == *n {
        debug!("√{} is an integer", n);
        return (a0, Vec::new());
    }

    // the complete quotient is numer * (√n + addend) / denom, and denom is
    // always divisible by numer
    let mut addend = a0.clone();
    let mut numer = T::one();
    let mut denom = n.clone() - a0.clone() * a0.clone();

    let mut seen = HashSet::new();
    let mut period = Vec::new();
    loop {
        let d = match reduce_exact(&denom, &numer) {
            Ok(d) => d,
            Err(e) => {
                error!("expanding √{}: {}", n, e);
                panic!("{}", e);
            }
        };
        if !seen.insert((addend.clone(), d.clone())) {
            break;
        }

        let a = (a0.clone() + addend.clone()) / d.clone();
        trace!("√{}: addend = {}, denom = {}, a{} = {}", n, addend, d, period.len() + 1, a);

        addend = a.clone() * d.clone() - addend;
        denom = n.clone() - addend.clone() * addend.clone();
        numer = d;
        period.push(a);
    }

    debug!("√{} = [{}; ..] with period length {}", n, a0, period.len());
    (a0, period)
}

impl<S, T> FromSqrt<S> for ContinuedFraction<T>
where
    S: WithUnsigned<Unsigned = T>,
    T: Integer + Roots + Clone + Hash + Display,
{
    type Error = Error;

    fn from_sqrt(target: S) -> Result<Self, Error> {
        if target.is_negative() {
            return Err(Error::NegativeRadicand);
        }

        let (a0, period) = expand_sqrt(&target.into_magnitude());
        Ok(ContinuedFraction::new_raw(vec![a0], period, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraction::Fraction;

    #[test]
    fn expand_sqrt_test() {
        assert_eq!(expand_sqrt(&23u64), (4, vec![1, 3, 1, 8]));
        assert_eq!(expand_sqrt(&2u64), (1, vec![2]));
        assert_eq!(expand_sqrt(&7u32), (2, vec![1, 1, 1, 4]));
        assert_eq!(expand_sqrt(&13u64), (3, vec![1, 1, 1, 1, 6]));
        assert_eq!(
            expand_sqrt(&94u64),
            (9, vec![1, 2, 3, 1, 1, 5, 1, 8, 1, 5, 1, 1, 3, 2, 1, 18])
        );
    }

    #[test]
    fn perfect_square_test() {
        assert_eq!(expand_sqrt(&16u64), (4, vec![]));
        assert_eq!(expand_sqrt(&1u64), (1, vec![]));
        assert_eq!(expand_sqrt(&0u64), (0, vec![]));
    }

    #[test]
    fn period_shape_test() {
        // the period of √n is a palindrome followed by 2*a0
        for n in 2..1000u64 {
            let (a0, period) = expand_sqrt(&n);
            if a0 * a0 == n {
                assert!(period.is_empty());
                continue;
            }

            let (last, body) = period.split_last().unwrap();
            assert_eq!(*last, 2 * a0, "√{}", n);
            assert!(body.iter().eq(body.iter().rev()), "√{}", n);
            assert!(body.iter().all(|&a| a <= a0), "√{}", n);
        }
    }

    // the panic in expand_sqrt needs an integer type whose arithmetic is
    // wrong, so only the exact division behind it is tested here
    #[test]
    fn reduce_exact_test() {
        assert_eq!(reduce_exact(&14u64, &7), Ok(2));
        assert_eq!(
            reduce_exact(&7u64, &2),
            Err(Error::InvariantViolation {
                numer: "7".to_string(),
                denom: "2".to_string()
            })
        );
    }

    #[test]
    fn from_sqrt_test() {
        let sq23 = ContinuedFraction::<u64>::from_sqrt(23i64).unwrap();
        assert_eq!(sq23.aperiodic_coeffs(), &[4]);
        assert_eq!(sq23.periodic_coeffs(), &[1, 3, 1, 8]);
        assert_eq!(format!("{}", sq23), "[4; (1, 3, 1, 8)]");

        let sq16 = ContinuedFraction::<u64>::from_sqrt(16i64).unwrap();
        assert!(sq16.is_integer());
        assert_eq!(format!("{}", sq16), "[4]");

        assert_eq!(
            ContinuedFraction::<u32>::from_sqrt(-4i32),
            Err(Error::NegativeRadicand)
        );
    }

    #[test]
    fn sqrt_convergents_test() {
        let sq2 = ContinuedFraction::<u64>::from_sqrt(2i64).unwrap();
        assert_eq!(
            (0..5).map(|k| sq2.convergent::<u64>(k)).collect::<Vec<_>>(),
            vec![
                Fraction::from(1u64),
                Fraction::new(3, 2, false),
                Fraction::new(7, 5, false),
                Fraction::new(17, 12, false),
                Fraction::new(41, 29, false)
            ]
        );
    }

    #[test]
    #[cfg(feature = "num-bigint")]
    fn big_sqrt_test() {
        use super::super::simple::convergent;
        use num_bigint::BigUint;

        let (a0, period) = expand_sqrt(&BigUint::from(23u8));
        assert_eq!(a0, BigUint::from(4u8));
        assert_eq!(period, [1u8, 3, 1, 8].iter().map(|&v| BigUint::from(v)).collect::<Vec<_>>());

        // the fundamental solution of x^2 - 61y^2 = 1 comes from two periods of √61
        let (a0, period) = expand_sqrt(&61u64);
        assert_eq!(period.len(), 11);
        let terms: Vec<u64> = period.iter().chain(period.iter()).take(21).cloned().collect();
        let (x, y): (BigUint, BigUint) = convergent(&a0, &terms[..]);
        assert_eq!(x, BigUint::from(1766319049u64));
        assert_eq!(y, BigUint::from(226153980u64));
        assert_eq!(&x * &x, &y * &y * 61u8 + 1u8);
    }
}
