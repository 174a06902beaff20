//! The canonicalizing constructor.
//!
//! Every multi-term result passes through here: terms are sorted by
//! exponent, runs of equal exponents are merged, zero coefficients are
//! dropped, and degenerate results collapse to scalars.

use nestpoly_rings::Coefficient;

use crate::error::CanonicalError;
use crate::monomial::Monomial;
use crate::poly::Poly;

impl<C: Coefficient> Poly<C> {
    /// Sums an unordered list of monomials into a canonical polynomial.
    ///
    /// Takes ownership of the monomials. Duplicate exponents are merged by
    /// adding their coefficients, and terms that end up zero are dropped.
    #[must_use]
    pub fn from_monomials(mut terms: Vec<Monomial<C>>) -> Self {
        // Stable, so equal exponents are merged in input order
        terms.sort_by_key(|m| m.exp);

        let mut merged: Vec<Monomial<C>> = Vec::with_capacity(terms.len());
        for term in terms {
            match merged.last_mut() {
                Some(last) if last.exp == term.exp => {
                    last.coeff = last.coeff.add(&term.coeff);
                    if last.coeff.is_zero() {
                        merged.pop();
                    }
                }
                _ => {
                    if !term.coeff.is_zero() {
                        merged.push(term);
                    }
                }
            }
        }

        Self::collapse(merged)
    }

    /// Wraps a sorted, exponent-unique, zero-free term list.
    ///
    /// An empty list becomes zero and a lone exponent-0 scalar term becomes
    /// that scalar. A lone exponent-0 term with a composite coefficient is
    /// kept: it depends on deeper variables only, and unwrapping it would
    /// shift their indices.
    pub(crate) fn collapse(terms: Vec<Monomial<C>>) -> Self {
        debug_assert!(terms.windows(2).all(|w| w[0].exp < w[1].exp));
        debug_assert!(terms.iter().all(|m| !m.coeff.is_zero()));

        if terms.is_empty() {
            return Self::zero();
        }
        if let [Monomial {
            coeff: Poly::Scalar(c),
            exp: 0,
        }] = &terms[..]
        {
            return Poly::Scalar(*c);
        }
        Poly::Composite(terms)
    }

    /// Builds a composite polynomial from terms that are already canonical.
    ///
    /// Unlike [`Poly::from_monomials`], nothing is sorted or merged; the
    /// terms are validated and rejected if they break the canonical form.
    ///
    /// # Errors
    ///
    /// Returns the first [`CanonicalError`] found in the resulting tree.
    pub fn from_canonical_terms(terms: Vec<Monomial<C>>) -> Result<Self, CanonicalError> {
        let poly = Poly::Composite(terms);
        poly.check_canonical()?;
        Ok(poly)
    }

    /// Verifies the canonical form of the whole tree.
    ///
    /// # Errors
    ///
    /// Returns the shallowest-first, left-to-right first violation.
    pub fn check_canonical(&self) -> Result<(), CanonicalError> {
        self.check_at_depth(0)
    }

    fn check_at_depth(&self, depth: usize) -> Result<(), CanonicalError> {
        let Poly::Composite(terms) = self else {
            return Ok(());
        };

        match terms.as_slice() {
            [] => return Err(CanonicalError::Empty { depth }),
            [Monomial {
                coeff: Poly::Scalar(_),
                exp: 0,
            }] => return Err(CanonicalError::DegenerateConstant { depth }),
            _ => {}
        }

        for pair in terms.windows(2) {
            if pair[0].exp >= pair[1].exp {
                return Err(CanonicalError::UnsortedExponents {
                    depth,
                    prev: pair[0].exp,
                    next: pair[1].exp,
                });
            }
        }

        if let Some(m) = terms.iter().find(|m| m.coeff.is_zero()) {
            return Err(CanonicalError::ZeroCoefficient { depth, exp: m.exp });
        }

        terms
            .iter()
            .try_for_each(|m| m.coeff.check_at_depth(depth + 1))
    }
}
