//! Greatest common divisor and least common multiple, shared by machine and
//! arbitrary precision integers.

use num_integer::Integer;

#[inline]
fn magnitude<T: Integer + Clone>(v: &T) -> T {
    if v < &T::zero() {
        T::zero() - v.clone()
    } else {
        v.clone()
    }
}

/// Greatest common divisor of the magnitudes of `a` and `b`.
///
/// Unlike the usual convention `gcd(0, x) = x`, this returns one whenever an
/// operand is zero, so reducing a zero numerator never changes the denominator.
///
/// Signed operands must not be the minimum of their type (such as `i64::MIN`),
/// whose magnitude is not representable. Fraction magnitudes are unsigned and
/// never hit this.
pub fn gcd<T: Integer + Clone>(a: &T, b: &T) -> T {
    let (mut a, mut b) = (magnitude(a), magnitude(b));
    if a.is_zero() || b.is_zero() {
        return T::one();
    }

    loop {
        if a.is_one() || b.is_one() {
            return T::one();
        }
        if a == b {
            return a;
        }

        let (larger, smaller) = if a > b { (a, b) } else { (b, a) };
        // one euclidean step, as multiply-subtract instead of modulo
        let quo = larger.clone() / smaller.clone();
        let rem = larger - quo * smaller.clone();
        if rem.is_zero() {
            return smaller;
        }
        a = smaller;
        b = rem;
    }
}

/// Least common multiple of the magnitudes of `a` and `b`, computed as `a / gcd(a, b) * b`
pub fn lcm<T: Integer + Clone>(a: &T, b: &T) -> T {
    let g = gcd(a, b);
    magnitude(a) / g * magnitude(b)
}
