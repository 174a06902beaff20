//! The recursive polynomial value type.
//!
//! A polynomial is either a scalar, constant in every remaining variable,
//! or a sum of monomials in the current variable whose coefficients are
//! polynomials in the variables below it.

use nestpoly_rings::{Coefficient, DefaultCoeff};

use crate::monomial::{Exp, Monomial};

/// Degree of a polynomial. The zero polynomial has degree -1.
pub type Degree = i64;

/// A sparse multivariate polynomial in recursive form.
///
/// Values built through the constructors in this crate are canonical; see
/// the crate documentation. The variants are public so callers can inspect
/// a polynomial by matching, but a hand-built `Composite` must satisfy the
/// canonical form ([`Poly::check_canonical`]) before it is handed to any
/// operation.
#[derive(Clone, Debug)]
pub enum Poly<C: Coefficient = DefaultCoeff> {
    /// A constant with respect to every remaining variable.
    Scalar(C),
    /// `Σ coeff·x^exp` over the current variable, sorted by ascending exponent.
    Composite(Vec<Monomial<C>>),
}

impl<C: Coefficient> Poly<C> {
    /// Creates a constant polynomial.
    #[must_use]
    pub fn from_coeff(c: C) -> Self {
        Poly::Scalar(c)
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Poly::Scalar(C::zero())
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Poly::Scalar(C::one())
    }

    /// Creates the variable with the given index.
    ///
    /// Variable `i` is `x` wrapped in `i` levels of exponent-0 terms, so it
    /// is independent of variables `0..i`.
    #[must_use]
    pub fn var(index: usize) -> Self {
        let mut poly = Poly::Composite(vec![Monomial::new(Self::one(), 1)]);
        for _ in 0..index {
            poly = Poly::Composite(vec![Monomial::new(poly, 0)]);
        }
        poly
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Poly::Scalar(c) if c.is_zero())
    }

    /// Returns true if this is a scalar, i.e. constant in the current variable
    /// and every variable below it.
    #[must_use]
    pub fn is_coeff(&self) -> bool {
        matches!(self, Poly::Scalar(_))
    }

    /// Returns the scalar value, if this polynomial is a scalar.
    #[must_use]
    pub fn as_coeff(&self) -> Option<C> {
        match self {
            Poly::Scalar(c) => Some(*c),
            Poly::Composite(_) => None,
        }
    }

    /// Returns the terms in ascending exponent order.
    ///
    /// Scalars have no terms.
    #[must_use]
    pub fn terms(&self) -> &[Monomial<C>] {
        match self {
            Poly::Scalar(_) => &[],
            Poly::Composite(terms) => terms,
        }
    }

    /// Returns the number of terms in the current variable.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms().len()
    }

    /// Returns true if there are no terms, i.e. this is a scalar.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms().is_empty()
    }

    /// Returns the highest exponent of the current variable.
    #[must_use]
    pub fn leading_exp(&self) -> Option<Exp> {
        self.terms().last().map(|m| m.exp)
    }

    /// Computes the total degree across all variables.
    ///
    /// Returns -1 for the zero polynomial and 0 for other scalars.
    #[must_use]
    pub fn degree(&self) -> Degree {
        match self {
            Poly::Scalar(c) => scalar_degree(*c),
            Poly::Composite(terms) => terms.iter().map(Monomial::degree).max().unwrap_or(-1),
        }
    }

    /// Computes the degree in the variable with index `var_idx`.
    ///
    /// Returns -1 for the zero polynomial and 0 for other scalars,
    /// whatever the index.
    #[must_use]
    pub fn degree_by(&self, var_idx: usize) -> Degree {
        match self {
            Poly::Scalar(c) => scalar_degree(*c),
            Poly::Composite(terms) if var_idx == 0 => {
                terms.last().map_or(-1, |m| Degree::from(m.exp))
            }
            Poly::Composite(terms) => terms
                .iter()
                .map(|m| m.coeff.degree_by(var_idx - 1))
                .max()
                .unwrap_or(-1),
        }
    }

    /// Checks structural equality.
    ///
    /// Both operands being canonical, this is equality of polynomials.
    #[must_use]
    pub fn structurally_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Poly::Scalar(a), Poly::Scalar(b)) => a == b,
            (Poly::Composite(p), Poly::Composite(q)) => {
                let mut p = p.iter();
                let mut q = q.iter();
                loop {
                    match (p.next(), q.next()) {
                        (None, None) => return true,
                        (Some(a), Some(b)) => {
                            if a.exp != b.exp || !a.coeff.structurally_eq(&b.coeff) {
                                return false;
                            }
                        }
                        _ => return false,
                    }
                }
            }
            _ => false,
        }
    }
}

fn scalar_degree<C: Coefficient>(c: C) -> Degree {
    if c.is_zero() {
        -1
    } else {
        0
    }
}

impl<C: Coefficient> PartialEq for Poly<C> {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other)
    }
}

impl<C: Coefficient> Eq for Poly<C> {}

impl<C: Coefficient> Default for Poly<C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<C: Coefficient> From<C> for Poly<C> {
    fn from(c: C) -> Self {
        Self::from_coeff(c)
    }
}

impl<C: Coefficient> FromIterator<Monomial<C>> for Poly<C> {
    fn from_iter<I: IntoIterator<Item = Monomial<C>>>(iter: I) -> Self {
        Self::from_monomials(iter.into_iter().collect())
    }
}
