//! Property-based tests for fraction arithmetic and continued fraction expansion.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{convergent, expand_sqrt, gcd, ContinuedFraction, Fraction, FromSqrt};

    // Strategy for generating fractions with small components
    fn small_frac() -> impl Strategy<Value = Fraction> {
        (0u64..10_000, 1u64..10_000, any::<bool>()).prop_map(|(n, d, neg)| Fraction::new(n, d, neg))
    }

    // Strategy for generating non-zero fractions
    fn non_zero_frac() -> impl Strategy<Value = Fraction> {
        (1u64..10_000, 1u64..10_000, any::<bool>()).prop_map(|(n, d, neg)| Fraction::new(n, d, neg))
    }

    fn is_canonical(f: &Fraction) -> bool {
        if f.numer().is_zero() {
            f.denom().is_one() && !f.is_negative()
        } else {
            gcd(f.numer(), f.denom()) == 1
        }
    }

    proptest! {
        // Canonical form

        #[test]
        fn new_is_canonical(n in 0u64..100_000, d in 1u64..100_000, neg in any::<bool>()) {
            let f = Fraction::new(n, d, neg);
            prop_assert!(is_canonical(&f));
            // the value is unchanged by reduction
            prop_assert_eq!(f.numer() * d, n * f.denom());
        }

        #[test]
        fn arithmetic_is_canonical(a in small_frac(), b in non_zero_frac()) {
            prop_assert!(is_canonical(&(&a + &b)));
            prop_assert!(is_canonical(&(&a - &b)));
            prop_assert!(is_canonical(&(&a * &b)));
            prop_assert!(is_canonical(&(&a / &b)));
        }

        #[test]
        fn components_round_trip(n in -100_000i64..100_000, d in 1i64..100_000) {
            let f = Fraction::from_signed(n, d);
            let (sn, sd) = f.get_components().unwrap();
            prop_assert_eq!(sn * d, n * sd);
            prop_assert!(sd > 0);
        }

        // Field laws

        #[test]
        fn add_commutative(a in small_frac(), b in small_frac()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_frac(), b in small_frac(), c in small_frac()) {
            prop_assert_eq!((&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn sub_is_add_negated(a in small_frac(), b in small_frac()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn add_inverse(a in small_frac()) {
            prop_assert!((&a + &(-&a)).is_zero());
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn distributive(a in small_frac(), b in small_frac(), c in small_frac()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn div_then_mul(a in small_frac(), b in non_zero_frac()) {
            prop_assert_eq!(&(&a / &b) * &b, a);
        }

        #[test]
        fn double_inverse(a in non_zero_frac()) {
            let inv = a.inverse().unwrap();
            prop_assert_eq!(inv.is_negative(), a.is_negative());
            prop_assert_eq!(inv.inverse().unwrap(), a);
        }

        // Ordering

        #[test]
        fn order_is_total(a in small_frac(), b in small_frac()) {
            let relations = [a < b, a == b, a > b];
            prop_assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
            prop_assert_eq!(a < b, (&b - &a) > Fraction::<u64>::zero());
        }

        #[test]
        fn gcd_divides(a in 1u64..1_000_000, b in 1u64..1_000_000) {
            let g = gcd(&a, &b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
            prop_assert_eq!(gcd(&(a / g), &(b / g)), 1);
        }

        // Continued fractions

        #[test]
        fn euclid_round_trip(a in small_frac()) {
            let cf = ContinuedFraction::from(a.clone());
            prop_assert_eq!(cf.to_fraction().value(), a);
        }

        #[test]
        fn sqrt_convergents_agree(n in 2u64..10_000, terms in 0usize..20) {
            let cf = ContinuedFraction::<u64>::from_sqrt(n as i64).unwrap();
            // the forward iterator stops on overflow
            if let Some(forward) = cf.convergents().nth(terms) {
                prop_assert_eq!(forward, cf.convergent::<u64>(terms));
            }
        }

        #[test]
        fn sqrt_period_is_palindromic(n in 2u64..1_000_000) {
            let (a0, period) = expand_sqrt(&n);
            if a0 * a0 == n {
                prop_assert!(period.is_empty());
            } else {
                let (last, body) = period.split_last().unwrap();
                prop_assert_eq!(*last, 2 * a0);
                prop_assert!(body.iter().eq(body.iter().rev()));
            }
        }

        #[test]
        fn convergent_of_integer(a0 in any::<u32>()) {
            let empty: [u32; 0] = [];
            let (n, d): (u64, u64) = convergent(&a0, &empty[..]);
            prop_assert_eq!(n, a0 as u64);
            prop_assert_eq!(d, 1);
        }
    }

    #[cfg(feature = "num-bigint")]
    proptest! {
        #[test]
        fn big_fraction_agrees(a in small_frac(), b in non_zero_frac()) {
            use crate::BigFraction;
            use num_bigint::BigUint;

            let big = |f: &Fraction| BigFraction::new(
                BigUint::from(*f.numer()),
                BigUint::from(*f.denom()),
                f.is_negative(),
            );
            let (ba, bb) = (big(&a), big(&b));
            prop_assert_eq!(&ba + &bb, big(&(&a + &b)));
            prop_assert_eq!(&ba - &bb, big(&(&a - &b)));
            prop_assert_eq!(&ba * &bb, big(&(&a * &b)));
            prop_assert_eq!(&ba / &bb, big(&(&a / &b)));
        }
    }
}
