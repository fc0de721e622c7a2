//! Implementation of simple continued fractions

use super::block::Block;
use crate::fraction::Fraction;
use crate::traits::{Approximation, Magnitude};
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, Num};
use std::fmt;

/// This struct represents a simple continued fraction `a0 + 1/(a1 + 1/ (a2 + ...))`
/// Where a0, a1, a2, .. are non-negative integers, and the sign is stored separately.
/// It's capable of representing rational numbers and quadratic surds
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContinuedFraction<T> {
    /// Coefficients of aperiodic part
    a_coeffs: Vec<T>,

    /// Coefficients of periodic part
    p_coeffs: Vec<T>,

    /// Sign of the fraction
    negative: bool,
}

impl<T> ContinuedFraction<T> {
    #[inline]
    pub(crate) fn new_raw(a_coeffs: Vec<T>, p_coeffs: Vec<T>, negative: bool) -> Self {
        ContinuedFraction {
            a_coeffs,
            p_coeffs,
            negative,
        }
    }

    #[inline]
    pub fn aperiodic_coeffs(&self) -> &[T] {
        &self.a_coeffs[..]
    }

    #[inline]
    pub fn periodic_coeffs(&self) -> &[T] {
        &self.p_coeffs[..]
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_rational(&self) -> bool {
        self.p_coeffs.is_empty()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.a_coeffs.len() == 1 && self.p_coeffs.is_empty()
    }
}

impl<T: Num + Clone> ContinuedFraction<T> {
    /// Create a continued fraction from its coefficients.
    ///
    /// Zero coefficients after the first one are eliminated, and a finite
    /// fraction never ends with one, so that equal numbers have the same
    /// representation.
    ///
    /// # Panics
    /// Panics if `a_coeffs` is empty, or if the periodic part contains a zero.
    pub fn new(a_coeffs: Vec<T>, mut p_coeffs: Vec<T>, negative: bool) -> Self {
        if a_coeffs.is_empty() {
            panic!("at least one coefficient is required!");
        }
        if p_coeffs.iter().any(T::is_zero) {
            panic!("zero coefficient in the periodic part!");
        }

        let mut dedup_a: Vec<T> = Vec::with_capacity(a_coeffs.len());
        for a in a_coeffs {
            if dedup_a.len() >= 2 && dedup_a.last().map_or(false, T::is_zero) {
                // [.., x, 0, a, ..] = [.., x + a, ..]
                dedup_a.pop();
                if let Some(x) = dedup_a.pop() {
                    dedup_a.push(x + a);
                }
            } else {
                dedup_a.push(a);
            }
        }

        if !p_coeffs.is_empty() {
            if dedup_a.len() >= 2 && dedup_a.last().map_or(false, T::is_zero) {
                // [.., x, 0, (p0, p1, ..)] = [.., x + p0, (p1, .., p0)]
                dedup_a.pop();
                let p0 = p_coeffs.remove(0);
                if let Some(x) = dedup_a.pop() {
                    dedup_a.push(x + p0.clone());
                }
                p_coeffs.push(p0);
            }
        } else {
            while dedup_a.len() >= 2 {
                let n = dedup_a.len();
                if dedup_a[n - 1].is_zero() {
                    // [.., x, y, 0] = [.., x]
                    dedup_a.truncate(n - 2);
                } else if dedup_a[n - 1].is_one() {
                    // [.., x, 1] = [.., x + 1]
                    let mut tail = dedup_a.split_off(n - 2).into_iter();
                    if let (Some(x), Some(one)) = (tail.next(), tail.next()) {
                        dedup_a.push(x + one);
                    }
                } else {
                    break;
                }
            }

            if dedup_a.is_empty() {
                panic!("no effective coefficient!");
            }
        }

        let is_zero = p_coeffs.is_empty() && dedup_a.len() == 1 && dedup_a[0].is_zero();
        ContinuedFraction {
            a_coeffs: dedup_a,
            p_coeffs,
            negative: negative && !is_zero,
        }
    }
}

/// Iterator of coeffcients in a [ContinuedFraction]
#[derive(Debug, Clone)]
pub struct Coefficients<'a, T> {
    a_iter: Option<std::slice::Iter<'a, T>>, // None if aperiodic part has been consumed
    p_ref: &'a [T],
    p_iter: Option<std::slice::Iter<'a, T>>, // None before aperiodic part is consumed, or when periodic part is empty
}

impl<'a, T> Iterator for Coefficients<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(it) = self.a_iter.as_mut() {
            // in aperiodic part
            if let Some(v) = it.next() {
                return Some(v);
            }
            self.a_iter = None;
            if self.p_ref.is_empty() {
                return None;
            }
        }

        // in periodic part, restart when a period is consumed
        if self.a_iter.is_none() && !self.p_ref.is_empty() {
            let p_ref = self.p_ref;
            let it = self.p_iter.get_or_insert_with(|| p_ref.iter());
            match it.next() {
                Some(v) => Some(v),
                None => {
                    let mut new_iter = p_ref.iter();
                    let result = new_iter.next();
                    self.p_iter = Some(new_iter);
                    result
                }
            }
        } else {
            None
        }
    }
}

/// Iterator of convergents of a [ContinuedFraction]
#[derive(Debug, Clone)]
pub struct Convergents<'a, T> {
    coeffs: Coefficients<'a, T>,
    block: Block<T>,
    neg: bool, // store the sign
}

impl<'a, T: Magnitude + CheckedAdd + CheckedMul> Iterator for Convergents<'a, T> {
    type Item = Fraction<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.coeffs.next()?;
        let (p, q) = self.block.checked_rmove(a.clone())?;
        self.block.update(p.clone(), q.clone());
        Some(Fraction::new(p, q, self.neg))
    }
}

impl<T> ContinuedFraction<T> {
    /// Returns an iterator of the coefficients in the continued fraction,
    /// which never ends if the fraction is periodic.
    /// Note that for a negative number, the coefficients of it's absolute value is returned
    pub fn coeffs(&self) -> Coefficients<T> {
        Coefficients {
            a_iter: Some(self.a_coeffs.iter()),
            p_ref: &self.p_coeffs,
            p_iter: None,
        }
    }
}

impl<T: Magnitude + CheckedAdd + CheckedMul> ContinuedFraction<T> {
    /// Returns an iterator of the convergents. The iterator will stop
    /// if all coefficients are consumed, or numeric overflow happened.
    pub fn convergents(&self) -> Convergents<T> {
        Convergents {
            coeffs: self.coeffs(),
            block: Block::identity(),
            neg: self.negative,
        }
    }
}

impl<T: Magnitude> ContinuedFraction<T> {
    /// The convergent using `a0` and the next `terms` coefficients,
    /// evaluated in the (usually wider) integer type `U`.
    pub fn convergent<U: Magnitude + From<T>>(&self, terms: usize) -> Fraction<U> {
        let mut coeffs = self.coeffs().take(terms + 1).cloned();
        let a0 = match coeffs.next() {
            Some(a0) => a0,
            None => return Fraction::from_integer(U::zero()),
        };
        let rest: Vec<T> = coeffs.collect();
        let (numer, denom) = convergent::<T, U>(&a0, &rest);
        Fraction::new(numer, denom, self.negative)
    }

    /// This method returns the corresponding rational number if it's rational,
    /// returns the expansion until the first repeating occurence
    pub fn to_fraction(&self) -> Approximation<Fraction<T>> {
        if self.is_rational() {
            Approximation::Exact(self.convergent(self.a_coeffs.len() - 1))
        } else {
            Approximation::Approximated(self.convergent(self.a_coeffs.len() + self.p_coeffs.len()))
        }
    }
}

/// Evaluate the finite continued fraction `[a0; terms..]` as `(numerator, denominator)`
///
/// The fraction is folded from the last term backwards, all in the integer type `U`
/// so that coefficients stored in machine words can produce big convergents.
pub fn convergent<T: Clone, U: Integer + Clone + From<T>>(a0: &T, terms: &[T]) -> (U, U) {
    let mut iter = terms.iter().rev();
    let (mut numer, mut denom) = match iter.next() {
        Some(last) => (U::one(), U::from(last.clone())),
        None => return (U::from(a0.clone()), U::one()),
    };

    // invariant: numer / denom = 1 / [a_i; a_(i+1), .., a_k]
    for a in iter {
        let next = U::from(a.clone()) * denom.clone() + numer;
        numer = denom;
        denom = next;
    }

    (numer + U::from(a0.clone()) * denom.clone(), denom)
}

impl<T: Magnitude> From<Fraction<T>> for ContinuedFraction<T> {
    fn from(f: Fraction<T>) -> Self {
        let negative = f.is_negative();
        let mut n = f.numer().clone();
        let mut d = f.denom().clone();

        let mut coeffs = Vec::new();
        while !d.is_zero() {
            let (quo, rem) = n.div_rem(&d);
            coeffs.push(quo);
            n = d;
            d = rem;
        }

        ContinuedFraction {
            a_coeffs: coeffs,
            p_coeffs: Vec::new(),
            negative,
        }
    }
}

impl<T: fmt::Display> fmt::Display for ContinuedFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }

        let mut aiter = self.a_coeffs.iter();
        match aiter.next() {
            Some(a0) => write!(f, "[{}", a0)?,
            None => write!(f, "[0")?,
        }
        if self.a_coeffs.len() <= 1 && self.p_coeffs.is_empty() {
            return write!(f, "]");
        }

        write!(f, "; ")?;
        let mut first = true;
        for v in aiter {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
            first = false;
        }

        if !self.p_coeffs.is_empty() {
            if !first {
                write!(f, ", ")?;
            }
            let mut piter = self.p_coeffs.iter();
            if let Some(p) = piter.next() {
                write!(f, "({}", p)?;
            }
            for v in piter {
                write!(f, ", {}", v)?;
            }
            write!(f, ")")?;
        }
        write!(f, "]")
    }
}
