//! Coefficient traits.
//!
//! This module defines the scalar type every polynomial coefficient is
//! drawn from.

use std::fmt::{Debug, Display};

use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};

/// A fixed-width signed integer usable as a polynomial coefficient.
///
/// # Laws
///
/// - Addition and multiplication wrap, forming the ring Z/2^BITS
/// - `zero()` is the additive identity, `one()` the multiplicative one
/// - Negation wraps (`MIN.wrapping_neg() == MIN`), so the negation of a
///   non-zero value is never zero
pub trait Coefficient:
    PrimInt + Signed + WrappingAdd + WrappingSub + WrappingMul + WrappingNeg + Debug + Display
{
    /// Computes `self^exp` by binary exponentiation, wrapping on overflow.
    ///
    /// `x^0` is one for every `x`, including zero.
    #[must_use]
    fn pow_wrapping(self, exp: u32) -> Self {
        let mut result = Self::one();
        let mut base = self;
        let mut exp = exp;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.wrapping_mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.wrapping_mul(&base);
            }
        }

        result
    }
}

impl<T> Coefficient for T where
    T: PrimInt + Signed + WrappingAdd + WrappingSub + WrappingMul + WrappingNeg + Debug + Display
{
}
