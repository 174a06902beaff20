//! # nestpoly-rings
//!
//! Coefficient rings for nestpoly.
//!
//! This crate provides:
//! - The `Coefficient` trait: fixed-width signed integers with wrapping
//!   ring operations
//! - A blanket implementation covering every primitive signed integer
//!
//! ## Overflow
//!
//! Coefficient arithmetic wraps on overflow, so every supported type is the
//! ring of integers modulo 2^BITS. Ring laws therefore hold even when
//! intermediate values leave the representable range.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integers::DefaultCoeff;
pub use traits::Coefficient;
