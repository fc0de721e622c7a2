use num_integer::Integer;
use num_traits::{NumRef, Signed, Unsigned};

#[cfg(feature = "num-bigint")]
use num_bigint::{BigInt, BigUint};

/// A helper trait to define valid type that can be used as the magnitude of a
/// [Fraction][crate::Fraction]. The sign is always stored separately.
pub trait Magnitude: Integer + Unsigned + NumRef + Clone {}
impl<T: Integer + Unsigned + NumRef + Clone> Magnitude for T {}

/// In case there are multiple solution for square root,
/// only canonical result will be returned
pub trait FromSqrt<T>: Sized {
    type Error;

    fn from_sqrt(t: T) -> Result<Self, Self::Error>;
}

#[derive(PartialEq, Debug)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the computed value regardless of whether it's exact
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }
}

pub trait WithSigned: Unsigned {
    type Signed;

    /// Returns `None` if the value doesn't fit in the positive range of the signed type
    fn to_signed(self) -> Option<Self::Signed>;
}

pub trait WithUnsigned: Signed {
    type Unsigned;

    /// The absolute value in the unsigned type, which never overflows
    fn into_magnitude(self) -> Self::Unsigned;
}

macro_rules! impl_primitive_sign {
    ($TSigned:ty, $TUnsigned:ty) => {
        impl WithSigned for $TUnsigned {
            type Signed = $TSigned;
            #[inline]
            fn to_signed(self) -> Option<Self::Signed> {
                if self > <$TSigned>::MAX as $TUnsigned {
                    None
                } else {
                    Some(self as $TSigned)
                }
            }
        }
        impl WithUnsigned for $TSigned {
            type Unsigned = $TUnsigned;
            #[inline]
            fn into_magnitude(self) -> Self::Unsigned {
                self.unsigned_abs()
            }
        }
    };
}
impl_primitive_sign!(i8, u8);
impl_primitive_sign!(i16, u16);
impl_primitive_sign!(i32, u32);
impl_primitive_sign!(i64, u64);
impl_primitive_sign!(i128, u128);

#[cfg(feature = "num-bigint")]
impl WithSigned for BigUint {
    type Signed = BigInt;
    #[inline]
    fn to_signed(self) -> Option<Self::Signed> {
        Some(BigInt::from(self))
    }
}

#[cfg(feature = "num-bigint")]
impl WithUnsigned for BigInt {
    type Unsigned = BigUint;
    #[inline]
    fn into_magnitude(self) -> Self::Unsigned {
        self.into_parts().1
    }
}
