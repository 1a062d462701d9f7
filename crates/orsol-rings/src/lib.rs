//! # orsol-rings
//!
//! Coefficient rings for Orlik-Solomon algebras.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `CommutativeRing`, `Field`
//! - Concrete implementations: Z, Q, Z_p
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── Field
//! ```
//!
//! Every concrete ring can be printed and parsed back, which is what the
//! textual form of algebra elements relies on.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod finite_field;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::ParseCoefficientError;
pub use finite_field::FiniteField;
pub use integers::Z;
pub use rationals::Q;
pub use traits::{CommutativeRing, Field, Ring};
