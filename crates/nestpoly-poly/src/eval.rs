//! Evaluation and composition.
//!
//! Both walk the terms in ascending exponent order, keeping a running power
//! of the substituted value and advancing it by the exponent gap between
//! consecutive terms with binary exponentiation. Sparse, sorted exponents
//! therefore cost `O(log gap)` multiplications per term.

use nestpoly_rings::Coefficient;
use tracing::{debug, trace};

use crate::monomial::{Exp, Monomial};
use crate::poly::Poly;

impl<C: Coefficient> Poly<C> {
    /// Evaluates the polynomial with the outermost variable set to `x`.
    ///
    /// The result is a polynomial in the remaining variables, now indexed
    /// from 0. Scalars are returned unchanged.
    #[must_use]
    pub fn at(&self, x: C) -> Self {
        let Poly::Composite(terms) = self else {
            return self.clone();
        };

        let mut result = Self::zero();
        let mut power = C::one();
        let mut reached: Exp = 0;

        for term in terms {
            power = power.wrapping_mul(&x.pow_wrapping(term.exp - reached));
            reached = term.exp;
            result = result.add(&term.coeff.scale(power));
        }

        result
    }

    /// Returns the value the polynomial takes when every variable is 0.
    ///
    /// Only the chain of exponent-0 terms from the root survives.
    #[must_use]
    pub fn at_zeros(&self) -> C {
        match self {
            Poly::Scalar(c) => *c,
            Poly::Composite(terms) => match terms.first() {
                Some(m) if m.exp == 0 => m.coeff.at_zeros(),
                _ => C::zero(),
            },
        }
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// # Panics
    ///
    /// Panics if an exponent of the result would exceed [`Exp::MAX`].
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Substitutes `substitutions[i]` for variable `i` simultaneously.
    ///
    /// Variables with index `>= substitutions.len()` are set to 0, so with
    /// no substitutions the result is the constant term.
    ///
    /// # Panics
    ///
    /// Panics if expanding a substituted power needs an exponent past
    /// [`Exp::MAX`].
    #[must_use]
    pub fn compose(&self, substitutions: &[Poly<C>]) -> Self {
        debug!(
            count = substitutions.len(),
            terms = self.len(),
            "composing polynomial"
        );
        compose_at_depth(self.clone(), substitutions, 0)
    }
}

/// Substitutes variables `depth..` of `poly`, taking ownership of it.
///
/// Coefficients are resolved first, so the fold at this depth multiplies
/// polynomials that already live in the substitutions' variables.
fn compose_at_depth<C: Coefficient>(poly: Poly<C>, substitutions: &[Poly<C>], depth: usize) -> Poly<C> {
    let Some(x) = substitutions.get(depth) else {
        return Poly::Scalar(poly.at_zeros());
    };
    let terms = match poly {
        Poly::Composite(terms) => terms,
        scalar @ Poly::Scalar(_) => return scalar,
    };

    trace!(depth, terms = terms.len(), "substituting variable");

    let resolved: Vec<Monomial<C>> = terms
        .into_iter()
        .map(|m| Monomial::new(compose_at_depth(m.coeff, substitutions, depth + 1), m.exp))
        .collect();

    eval_terms_at(&resolved, x)
}

/// Folds `Σ coeff·x^exp` for a polynomial `x`, terms in ascending order.
fn eval_terms_at<C: Coefficient>(terms: &[Monomial<C>], x: &Poly<C>) -> Poly<C> {
    let mut result = Poly::zero();
    let mut power = Poly::one();
    let mut reached: Exp = 0;

    for term in terms {
        if term.exp > reached {
            power = power.mul(&x.pow(term.exp - reached));
            reached = term.exp;
        }
        result = result.add(&term.coeff.mul(&power));
    }

    result
}
