//! # nestpoly-poly
//!
//! Recursive sparse multivariate polynomials for nestpoly.
//!
//! This crate provides:
//! - A canonical recursive polynomial value (`Poly`): a scalar, or a sorted
//!   sum of monomials whose coefficients are polynomials in the next variable
//! - Merge-based addition and distributive multiplication
//! - Degree queries and structural equality
//! - Evaluation at a scalar and simultaneous substitution (composition)
//!
//! ## Variables
//!
//! Variable 0 is the outermost variable of a polynomial. Coefficients one
//! level deeper are polynomials in variable 1, and so on.
//!
//! ## Canonical Form
//!
//! Every `Poly` produced by this crate has strictly increasing exponents,
//! no zero coefficients, no empty term list, and never a lone exponent-0
//! term with a scalar coefficient. Two canonical polynomials are equal as
//! mathematical objects iff they are structurally identical.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod display;
pub mod error;
pub mod eval;
pub mod monomial;
pub mod normalize;
pub mod poly;

#[cfg(test)]
mod proptests;

pub use display::{Notation, RenderConfig, Rendered};
pub use error::CanonicalError;
pub use monomial::{Exp, Monomial};
pub use poly::{Degree, Poly};
