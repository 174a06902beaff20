//! Monomials of recursive polynomials.
//!
//! A monomial is `coeff * x^exp`, where `x` is the current variable and
//! `coeff` is itself a polynomial in the remaining variables.

use nestpoly_rings::{Coefficient, DefaultCoeff};

use crate::poly::Poly;

/// Exponent of the current variable.
pub type Exp = u32;

/// A single term `coeff * x^exp` of a composite polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monomial<C: Coefficient = DefaultCoeff> {
    /// Coefficient, a polynomial in the variables one level deeper.
    pub coeff: Poly<C>,
    /// Exponent of the current variable.
    pub exp: Exp,
}

impl<C: Coefficient> Monomial<C> {
    /// Builds the monomial `coeff * x^exp`, taking ownership of `coeff`.
    #[must_use]
    pub fn new(coeff: Poly<C>, exp: Exp) -> Self {
        Self { coeff, exp }
    }

    /// Builds the monomial `c * x^exp` with a scalar coefficient.
    #[must_use]
    pub fn from_coeff(c: C, exp: Exp) -> Self {
        Self::new(Poly::from_coeff(c), exp)
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Total degree: the exponent plus the total degree of the coefficient.
    ///
    /// Returns -1 if the coefficient is zero.
    #[must_use]
    pub fn degree(&self) -> crate::Degree {
        if self.coeff.is_zero() {
            -1
        } else {
            self.coeff.degree() + crate::Degree::from(self.exp)
        }
    }
}

impl<C: Coefficient> From<(C, Exp)> for Monomial<C> {
    fn from((c, exp): (C, Exp)) -> Self {
        Self::from_coeff(c, exp)
    }
}
