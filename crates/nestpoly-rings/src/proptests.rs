//! Property-based tests for coefficient arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{WrappingAdd, WrappingMul};
    use proptest::prelude::*;

    use crate::Coefficient;

    // Strategy for generating small exponents
    fn small_exp() -> impl Strategy<Value = u32> {
        0u32..40u32
    }

    // Reference: repeated wrapping multiplication
    fn naive_pow(base: i64, exp: u32) -> i64 {
        (0..exp).fold(1i64, |acc, _| acc.wrapping_mul(base))
    }

    proptest! {
        #[test]
        fn pow_matches_repeated_mul(base in any::<i64>(), exp in small_exp()) {
            prop_assert_eq!(base.pow_wrapping(exp), naive_pow(base, exp));
        }

        #[test]
        fn pow_adds_exponents(base in -50i64..50i64, a in small_exp(), b in small_exp()) {
            prop_assert_eq!(
                base.pow_wrapping(a + b),
                base.pow_wrapping(a).wrapping_mul(base.pow_wrapping(b))
            );
        }

        #[test]
        fn wrapping_distributive(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            // a * (b + c) = a * b + a * c, even across overflow
            let left = WrappingMul::wrapping_mul(&a, &WrappingAdd::wrapping_add(&b, &c));
            let right = WrappingAdd::wrapping_add(
                &WrappingMul::wrapping_mul(&a, &b),
                &WrappingMul::wrapping_mul(&a, &c),
            );
            prop_assert_eq!(left, right);
        }
    }
}
