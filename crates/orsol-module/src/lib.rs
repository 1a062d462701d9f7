//! # orsol-module
//!
//! Free modules over a coefficient ring with a combinatorial basis.
//!
//! An element of the free module on a set of keys `K` is a finite linear
//! combination `sum c_k * [k]`. This crate stores such combinations
//! sparsely, keeps them free of zero coefficients, and provides the
//! module arithmetic (sum, difference, scalar multiple). Keys that carry a
//! degree make the module graded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combination;
pub mod graded;

#[cfg(test)]
mod proptests;

pub use combination::LinearCombination;
pub use graded::Graded;
