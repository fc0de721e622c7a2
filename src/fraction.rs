//! Exact rational numbers stored as sign and magnitude.
//!
//! [Fraction] is generic over its magnitude type, so the same canonical
//! arithmetic runs on machine words (`Fraction<u64>`) and on arbitrary
//! precision integers ([BigFraction]).

use core::cmp::Ordering;
use core::convert::TryFrom;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Signed, Zero};
use std::fmt;

#[cfg(feature = "num-bigint")]
use num_bigint::{BigInt, BigUint};

use crate::error::Error;
use crate::gcd::gcd;
use crate::traits::{Magnitude, WithSigned, WithUnsigned};

/// A rational number `±numer/denom`.
///
/// Every live value is canonical: `denom >= 1`, `numer` and `denom` are
/// coprime, and zero is always `0/1` with the sign cleared. Hence the derived
/// equality and hashing are the numeric ones.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction<T = u64> {
    numer: T,
    denom: T,       // positive
    negative: bool, // false when numer is zero
}

/// Fraction with arbitrary precision magnitudes
#[cfg(feature = "num-bigint")]
pub type BigFraction = Fraction<BigUint>;

impl<T> Fraction<T> {
    #[inline]
    pub(crate) const fn new_raw(numer: T, denom: T, negative: bool) -> Self {
        Fraction {
            numer,
            denom,
            negative,
        }
    }

    /// Magnitude of the numerator
    #[inline]
    pub fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &T {
        &self.denom
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl<T: Magnitude> Fraction<T> {
    /// Create a fraction from magnitudes and a sign, reduced to canonical form.
    pub fn try_new(numer: T, denom: T, negative: bool) -> Result<Self, Error> {
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let mut ret = Fraction::new_raw(numer, denom, negative);
        ret.reduce();
        Ok(ret)
    }

    /// Create a fraction from magnitudes and a sign, reduced to canonical form.
    ///
    /// # Panics
    /// Panics if `denom` is zero, see [Fraction::try_new] for the fallible version.
    #[inline]
    pub fn new(numer: T, denom: T, negative: bool) -> Self {
        match Self::try_new(numer, denom, negative) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }

    #[inline]
    pub fn from_integer(t: T) -> Self {
        Fraction::new_raw(t, T::one(), false)
    }

    /// Create a fraction from signed numerator and denominator. The sign of the
    /// result is the exclusive or of the operand signs.
    ///
    /// # Panics
    /// Panics if `denom` is zero.
    pub fn from_signed<S: WithUnsigned<Unsigned = T>>(numer: S, denom: S) -> Self {
        let negative = numer.is_negative() != denom.is_negative();
        Self::new(numer.into_magnitude(), denom.into_magnitude(), negative)
    }

    fn reduce(&mut self) {
        if self.numer.is_zero() {
            self.denom = T::one();
            self.negative = false;
            return;
        }

        let g = gcd(&self.numer, &self.denom);
        if g > T::one() {
            self.numer = self.numer.clone() / &g;
            self.denom = self.denom.clone() / g;
        }
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Fraction::new_raw(self.numer.clone(), self.denom.clone(), false)
    }

    /// Returns the reciprocal, keeping the sign
    pub fn inverse(&self) -> Result<Self, Error> {
        if self.numer.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Fraction::new_raw(
            self.denom.clone(),
            self.numer.clone(),
            self.negative,
        ))
    }

    /// Returns the signed numerator and the denominator in the signed counterpart
    /// of the magnitude type.
    pub fn get_components(&self) -> Result<(T::Signed, T::Signed), Error>
    where
        T: WithSigned,
        T::Signed: Signed,
    {
        let numer = self.numer.clone().to_signed().ok_or(Error::Overflow)?;
        let denom = self.denom.clone().to_signed().ok_or(Error::Overflow)?;
        if self.negative {
            Ok((-numer, denom))
        } else {
            Ok((numer, denom))
        }
    }

    /// Convert to a [Ratio] over the signed counterpart of the magnitude type
    pub fn to_ratio(&self) -> Result<Ratio<T::Signed>, Error>
    where
        T: WithSigned,
        T::Signed: Integer + Signed + Clone,
    {
        let (numer, denom) = self.get_components()?;
        Ok(Ratio::new_raw(numer, denom))
    }

    // Adds `±numer/denom` to self. Addition and subtraction both land here, so
    // they agree on every sign combination.
    fn accumulate(&mut self, numer: &T, denom: &T, negative: bool) {
        if numer.is_zero() {
            return; // self is already canonical
        }

        let lhs = self.numer.clone() * denom;
        let rhs = numer.clone() * &self.denom;
        self.denom = self.denom.clone() * denom;
        if self.negative == negative {
            self.numer = lhs + rhs;
        } else if lhs >= rhs {
            self.numer = lhs - rhs;
        } else {
            self.numer = rhs - lhs;
            self.negative = !self.negative;
        }
        self.reduce();
    }

    fn scale(&mut self, numer: &T, denom: &T, negative: bool) {
        self.numer = self.numer.clone() * numer;
        self.denom = self.denom.clone() * denom;
        self.negative ^= negative;
        self.reduce();
    }

    /// Divide self by `rhs` in place, failing if `rhs` is zero
    pub fn try_div_assign(&mut self, rhs: &Self) -> Result<(), Error> {
        if rhs.numer.is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.scale(&rhs.denom, &rhs.numer, rhs.negative);
        Ok(())
    }

    #[inline]
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        let mut ret = self.clone();
        ret.try_div_assign(rhs)?;
        Ok(ret)
    }
}

impl<T: Magnitude> Ord for Fraction<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (negative, _) => {
                let lhs = self.numer.clone() * &other.denom;
                let rhs = other.numer.clone() * &self.denom;
                if negative {
                    rhs.cmp(&lhs)
                } else {
                    lhs.cmp(&rhs)
                }
            }
        }
    }
}

impl<T: Magnitude> PartialOrd for Fraction<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, T: Magnitude> AddAssign<&'a Fraction<T>> for Fraction<T> {
    #[inline]
    fn add_assign(&mut self, rhs: &'a Fraction<T>) {
        self.accumulate(&rhs.numer, &rhs.denom, rhs.negative);
    }
}

impl<'a, T: Magnitude> SubAssign<&'a Fraction<T>> for Fraction<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a Fraction<T>) {
        self.accumulate(&rhs.numer, &rhs.denom, !rhs.negative);
    }
}

impl<'a, T: Magnitude> MulAssign<&'a Fraction<T>> for Fraction<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a Fraction<T>) {
        self.scale(&rhs.numer, &rhs.denom, rhs.negative);
    }
}

impl<'a, T: Magnitude> DivAssign<&'a Fraction<T>> for Fraction<T> {
    /// # Panics
    /// Panics if `rhs` is zero, see [Fraction::try_div_assign]
    #[inline]
    fn div_assign(&mut self, rhs: &'a Fraction<T>) {
        if let Err(e) = self.try_div_assign(rhs) {
            panic!("{}", e);
        }
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl<T: Magnitude> $imp_assign<Fraction<T>> for Fraction<T> {
            #[inline]
            fn $method_assign(&mut self, rhs: Fraction<T>) {
                $imp_assign::$method_assign(self, &rhs);
            }
        }
        impl<T: Magnitude> $imp<Fraction<T>> for Fraction<T> {
            type Output = Fraction<T>;
            #[inline]
            fn $method(mut self, rhs: Fraction<T>) -> Fraction<T> {
                $imp_assign::$method_assign(&mut self, &rhs);
                self
            }
        }
        impl<'a, T: Magnitude> $imp<&'a Fraction<T>> for Fraction<T> {
            type Output = Fraction<T>;
            #[inline]
            fn $method(mut self, rhs: &'a Fraction<T>) -> Fraction<T> {
                $imp_assign::$method_assign(&mut self, rhs);
                self
            }
        }
        impl<'a, 'b, T: Magnitude> $imp<&'b Fraction<T>> for &'a Fraction<T> {
            type Output = Fraction<T>;
            #[inline]
            fn $method(self, rhs: &'b Fraction<T>) -> Fraction<T> {
                let mut ret = self.clone();
                $imp_assign::$method_assign(&mut ret, rhs);
                ret
            }
        }
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign);
forward_binop!(impl Sub, sub, SubAssign, sub_assign);
forward_binop!(impl Mul, mul, MulAssign, mul_assign);
forward_binop!(impl Div, div, DivAssign, div_assign);

impl<T: Magnitude> Neg for Fraction<T> {
    type Output = Fraction<T>;

    #[inline]
    fn neg(mut self) -> Fraction<T> {
        if !self.numer.is_zero() {
            // don't negate zero
            self.negative = !self.negative;
        }
        self
    }
}

impl<'a, T: Magnitude> Neg for &'a Fraction<T> {
    type Output = Fraction<T>;

    #[inline]
    fn neg(self) -> Fraction<T> {
        -self.clone()
    }
}

impl<T: Magnitude> Zero for Fraction<T> {
    #[inline]
    fn zero() -> Self {
        Fraction::new_raw(T::zero(), T::one(), false)
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T: Magnitude> One for Fraction<T> {
    #[inline]
    fn one() -> Self {
        Fraction::new_raw(T::one(), T::one(), false)
    }
    #[inline]
    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one() && !self.negative
    }
}

impl<T: Magnitude> Default for Fraction<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: fmt::Display> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl<S: Integer + Clone + WithUnsigned<Unsigned = T>, T: Magnitude> From<Ratio<S>> for Fraction<T> {
    fn from(r: Ratio<S>) -> Self {
        let (numer, denom): (S, S) = r.into();
        Self::from_signed(numer, denom)
    }
}

// integers are converted as exact fractions with denominator one

macro_rules! impl_from_signed_primitive {
    ($($S:ty => $U:ty),*) => {$(
        impl<T: Magnitude + From<$U>> From<$S> for Fraction<T> {
            #[inline]
            fn from(v: $S) -> Self {
                Fraction::new_raw(T::from(v.unsigned_abs()), T::one(), v < 0)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned_primitive {
    ($($U:ty),*) => {$(
        impl<T: Magnitude + From<$U>> From<$U> for Fraction<T> {
            #[inline]
            fn from(v: $U) -> Self {
                Fraction::new_raw(T::from(v), T::one(), false)
            }
        }
    )*};
}

macro_rules! impl_try_into_ratio {
    ($($U:ty => $S:ty),*) => {$(
        impl TryFrom<Fraction<$U>> for Ratio<$S> {
            type Error = Error;
            #[inline]
            fn try_from(f: Fraction<$U>) -> Result<Self, Error> {
                f.to_ratio()
            }
        }
    )*};
}

impl_try_into_ratio!(u8 => i8, u16 => i16, u32 => i32, u64 => i64);
#[cfg(feature = "num-bigint")]
impl_try_into_ratio!(BigUint => BigInt);

impl_from_signed_primitive!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
impl_from_unsigned_primitive!(u8, u16, u32, u64);

#[cfg(feature = "num-bigint")]
impl From<BigInt> for Fraction<BigUint> {
    #[inline]
    fn from(v: BigInt) -> Self {
        let negative = v.is_negative();
        Fraction::new_raw(v.into_magnitude(), BigUint::one(), negative)
    }
}

#[cfg(feature = "num-bigint")]
impl From<BigUint> for Fraction<BigUint> {
    #[inline]
    fn from(v: BigUint) -> Self {
        Fraction::from_integer(v)
    }
}

macro_rules! impl_integer_binop {
    ($P:ty, $imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl<T: Magnitude> $imp_assign<$P> for Fraction<T>
        where
            Fraction<T>: From<$P>,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: $P) {
                $imp_assign::$method_assign(self, &Fraction::<T>::from(rhs));
            }
        }
        impl<T: Magnitude> $imp<$P> for Fraction<T>
        where
            Fraction<T>: From<$P>,
        {
            type Output = Fraction<T>;
            #[inline]
            fn $method(mut self, rhs: $P) -> Fraction<T> {
                $imp_assign::$method_assign(&mut self, &Fraction::<T>::from(rhs));
                self
            }
        }
    };
}

macro_rules! impl_integer_interop {
    ($($P:ty),* ; $v:ident => $owned:expr) => {$(
        impl_integer_binop!($P, Add, add, AddAssign, add_assign);
        impl_integer_binop!($P, Sub, sub, SubAssign, sub_assign);
        impl_integer_binop!($P, Mul, mul, MulAssign, mul_assign);
        impl_integer_binop!($P, Div, div, DivAssign, div_assign);

        impl<T: Magnitude> PartialEq<$P> for Fraction<T>
        where
            Fraction<T>: From<$P>,
        {
            #[inline]
            fn eq(&self, $v: &$P) -> bool {
                *self == Fraction::<T>::from($owned)
            }
        }

        impl<T: Magnitude> PartialOrd<$P> for Fraction<T>
        where
            Fraction<T>: From<$P>,
        {
            #[inline]
            fn partial_cmp(&self, $v: &$P) -> Option<Ordering> {
                Some(self.cmp(&Fraction::<T>::from($owned)))
            }
        }
    )*};
}

impl_integer_interop!(i8, i16, i32, i64, u8, u16, u32, u64; other => *other);

#[cfg(feature = "num-bigint")]
impl_integer_interop!(BigInt, BigUint; other => other.clone());
