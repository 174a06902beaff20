//! Canonical-form violations.
//!
//! Every operation of the engine is total over canonical input. The only
//! fallible surface is validating polynomials assembled outside the
//! canonicalizing constructor.

use thiserror::Error;

use crate::monomial::Exp;

/// A violation of the canonical form, located by nesting depth.
///
/// Depth 0 is the outermost variable; depth `d` is the coefficient of a
/// coefficient `d` levels down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CanonicalError {
    /// A composite polynomial with no terms; zero must be a scalar.
    #[error("composite polynomial at depth {depth} has no terms")]
    Empty {
        /// Nesting depth of the offending polynomial.
        depth: usize,
    },

    /// A term whose coefficient is the zero polynomial.
    #[error("term x^{exp} at depth {depth} has a zero coefficient")]
    ZeroCoefficient {
        /// Nesting depth of the offending polynomial.
        depth: usize,
        /// Exponent of the offending term.
        exp: Exp,
    },

    /// Exponents that are not strictly increasing.
    #[error("exponent {next} follows {prev} at depth {depth}")]
    UnsortedExponents {
        /// Nesting depth of the offending polynomial.
        depth: usize,
        /// Exponent of the earlier term.
        prev: Exp,
        /// Exponent of the later term.
        next: Exp,
    },

    /// A lone exponent-0 term with a scalar coefficient, which must be
    /// stored as that scalar.
    #[error("lone constant term at depth {depth} is not collapsed to a scalar")]
    DegenerateConstant {
        /// Nesting depth of the offending polynomial.
        depth: usize,
    },
}

impl CanonicalError {
    /// Returns the nesting depth at which the violation was found.
    #[must_use]
    pub fn depth(&self) -> usize {
        match *self {
            CanonicalError::Empty { depth }
            | CanonicalError::ZeroCoefficient { depth, .. }
            | CanonicalError::UnsortedExponents { depth, .. }
            | CanonicalError::DegenerateConstant { depth } => depth,
        }
    }
}
