//! # nestpoly
//!
//! Multivariate polynomial algebra over machine integers.
//!
//! Polynomials are stored recursively: a polynomial in `x0` whose
//! coefficients are polynomials in `x1`, and so on. Every value is kept in
//! a canonical form, so structural equality is mathematical equality.
//!
//! ## Features
//!
//! - **Canonical Construction**: unsorted, redundant monomials are merged
//!   into one normal form
//! - **Arithmetic**: merge-based addition, distributive multiplication,
//!   negation, subtraction, powers
//! - **Queries**: total degree, degree by variable, zero/scalar tests
//! - **Evaluation**: substitute a scalar for the outer variable
//! - **Composition**: substitute polynomials for every variable at once
//!
//! ## Quick Start
//!
//! ```rust
//! use nestpoly::prelude::*;
//!
//! // (x + 1)^2
//! let p: Poly = Poly::from_monomials(vec![
//!     Monomial::from_coeff(1, 0),
//!     Monomial::from_coeff(2, 1),
//!     Monomial::from_coeff(1, 2),
//! ]);
//! assert_eq!(p.at(3), Poly::from_coeff(16));
//! assert_eq!(p.to_string(), "(1,0)+(2,1)+(1,2)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use nestpoly_poly as poly;
pub use nestpoly_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use nestpoly_poly::{CanonicalError, Degree, Exp, Monomial, Notation, Poly, RenderConfig};
    pub use nestpoly_rings::Coefficient;
}
