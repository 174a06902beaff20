//! Polynomial arithmetic.
//!
//! Addition merges the sorted term lists of both operands; multiplication
//! expands distributively and canonicalizes the candidate terms. All
//! operations borrow their operands and return a new canonical polynomial.

use std::cmp::Ordering;

use nestpoly_rings::Coefficient;
use tracing::trace;

use crate::monomial::{Exp, Monomial};
use crate::poly::Poly;

impl<C: Coefficient> Poly<C> {
    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match (self, other) {
            (Poly::Scalar(a), Poly::Scalar(b)) => Poly::Scalar(a.wrapping_add(b)),
            (Poly::Scalar(c), Poly::Composite(terms)) | (Poly::Composite(terms), Poly::Scalar(c)) => {
                Self::add_coeff_to_terms(terms, *c)
            }
            (Poly::Composite(p), Poly::Composite(q)) => Self::merge_terms(p, q),
        }
    }

    /// Adds a scalar into the exponent-0 slot of a composite polynomial.
    fn add_coeff_to_terms(terms: &[Monomial<C>], c: C) -> Self {
        if c.is_zero() {
            return Poly::Composite(terms.to_vec());
        }

        match terms.split_first() {
            Some((head, rest)) if head.exp == 0 => {
                let sum = head.coeff.add(&Poly::Scalar(c));
                let mut result = Vec::with_capacity(terms.len());
                if !sum.is_zero() {
                    result.push(Monomial::new(sum, 0));
                }
                result.extend_from_slice(rest);
                Self::collapse(result)
            }
            _ => {
                let mut result = Vec::with_capacity(terms.len() + 1);
                result.push(Monomial::from_coeff(c, 0));
                result.extend_from_slice(terms);
                Poly::Composite(result)
            }
        }
    }

    /// Merges two sorted term lists, adding coefficients of equal exponents.
    fn merge_terms(a: &[Monomial<C>], b: &[Monomial<C>]) -> Self {
        let mut result = Vec::with_capacity(a.len() + b.len());
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            match a[i].exp.cmp(&b[j].exp) {
                Ordering::Less => {
                    result.push(a[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    result.push(b[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    let sum = a[i].coeff.add(&b[j].coeff);
                    if !sum.is_zero() {
                        result.push(Monomial::new(sum, a[i].exp));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        // Append remaining terms
        result.extend_from_slice(&a[i..]);
        result.extend_from_slice(&b[j..]);

        Self::collapse(result)
    }

    /// Multiplies two polynomials.
    ///
    /// Composite by composite is a full distributive expansion:
    /// `|p|·|q|` candidate terms, each a product of coefficients one level
    /// down, merged by [`Poly::from_monomials`].
    ///
    /// # Panics
    ///
    /// Panics if the exponents of two multiplied terms sum past
    /// [`Exp::MAX`].
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        match (self, other) {
            (Poly::Scalar(a), Poly::Scalar(b)) => Poly::Scalar(a.wrapping_mul(b)),
            (Poly::Scalar(c), Poly::Composite(terms)) | (Poly::Composite(terms), Poly::Scalar(c)) => {
                Self::scale_terms(terms, *c)
            }
            (Poly::Composite(p), Poly::Composite(q)) => Self::mul_terms(p, q),
        }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: C) -> Self {
        match self {
            Poly::Scalar(a) => Poly::Scalar(a.wrapping_mul(&c)),
            Poly::Composite(terms) => Self::scale_terms(terms, c),
        }
    }

    fn scale_terms(terms: &[Monomial<C>], c: C) -> Self {
        if c.is_zero() {
            return Self::zero();
        }

        // Scaling keeps exponents, so the order survives; only wrapped
        // products can vanish.
        let scaled = terms
            .iter()
            .map(|m| Monomial::new(m.coeff.scale(c), m.exp))
            .filter(|m| !m.is_zero())
            .collect();

        Self::collapse(scaled)
    }

    fn mul_terms(a: &[Monomial<C>], b: &[Monomial<C>]) -> Self {
        trace!(lhs = a.len(), rhs = b.len(), "expanding product");

        let mut candidates = Vec::with_capacity(a.len() * b.len());
        for m1 in a {
            for m2 in b {
                let exp = product_exp(m1.exp, m2.exp);
                candidates.push(Monomial::new(m1.coeff.mul(&m2.coeff), exp));
            }
        }

        Self::from_monomials(candidates)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        match self {
            Poly::Scalar(c) => Poly::Scalar(c.wrapping_neg()),
            Poly::Composite(terms) => Poly::Composite(
                terms
                    .iter()
                    .map(|m| Monomial::new(m.coeff.neg(), m.exp))
                    .collect(),
            ),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }
}

/// Exponent of `x^a · x^b`, checked in every build profile.
fn product_exp(a: Exp, b: Exp) -> Exp {
    match a.checked_add(b) {
        Some(exp) => exp,
        None => panic!("exponent overflow: x^{a} * x^{b} exceeds x^{}", Exp::MAX),
    }
}

impl<C: Coefficient> std::ops::Add for Poly<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Poly::add(&self, &rhs)
    }
}

impl<C: Coefficient> std::ops::Add<&Poly<C>> for &Poly<C> {
    type Output = Poly<C>;

    fn add(self, rhs: &Poly<C>) -> Self::Output {
        Poly::add(self, rhs)
    }
}

impl<C: Coefficient> std::ops::Sub for Poly<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Poly::sub(&self, &rhs)
    }
}

impl<C: Coefficient> std::ops::Sub<&Poly<C>> for &Poly<C> {
    type Output = Poly<C>;

    fn sub(self, rhs: &Poly<C>) -> Self::Output {
        Poly::sub(self, rhs)
    }
}

impl<C: Coefficient> std::ops::Mul for Poly<C> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Poly::mul(&self, &rhs)
    }
}

impl<C: Coefficient> std::ops::Mul<&Poly<C>> for &Poly<C> {
    type Output = Poly<C>;

    fn mul(self, rhs: &Poly<C>) -> Self::Output {
        Poly::mul(self, rhs)
    }
}

impl<C: Coefficient> std::ops::Neg for Poly<C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Poly::neg(&self)
    }
}

impl<C: Coefficient> std::ops::Neg for &Poly<C> {
    type Output = Poly<C>;

    fn neg(self) -> Self::Output {
        Poly::neg(self)
    }
}
