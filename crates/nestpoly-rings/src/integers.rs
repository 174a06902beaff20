//! Machine integers as coefficients.
//!
//! All primitive signed integers pick up [`crate::Coefficient`] through the blanket
//! implementation in [`crate::traits`]. The helpers here name the common
//! widths and pin down their wrapping behaviour.

/// The default coefficient type: a 64-bit signed integer.
///
/// `Poly` and `Monomial` use it when no coefficient type is named.
pub type DefaultCoeff = i64;
