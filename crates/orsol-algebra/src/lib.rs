//! # orsol-algebra
//!
//! Orlik-Solomon algebras of matroids.
//!
//! Let `M` be a matroid on a totally ordered ground set `X` and `R` a
//! commutative ring. The Orlik-Solomon algebra `A(M)` is the exterior
//! algebra on generators `e_x` (`x` in `X`) modulo the ideal generated by
//! `∂e_C` for every circuit `C`, where `∂` is the derivation sending every
//! `e_x` to 1. The no-broken-circuit (NBC) sets index a basis of `A(M)`.
//!
//! This crate provides:
//! - `OrderingIndex`: the total order on the ground set as ranks
//! - `BrokenCircuitTable`: broken circuits and their removed minima
//! - `SubsetReducer`: rewriting `e_S` in the NBC basis, memoized
//! - `BasisProductEngine`: products of basis elements
//! - `OrlikSolomonAlgebra`: the algebra itself, its text form and its
//!   multiplication table
//!
//! ## Example
//!
//! ```rust,ignore
//! use orsol_algebra::OrlikSolomonAlgebra;
//! use orsol_matroid::UniformMatroid;
//! use orsol_rings::Q;
//!
//! let os = OrlikSolomonAlgebra::<usize, Q>::new(&UniformMatroid::new(3, 4))?;
//! let g = os.algebra_generators();
//! let x = os.prod([&g[1].1, &g[2].1, &g[3].1])?;
//! assert_eq!(os.display(&x).to_string(), "OS{0, 1, 2} - OS{0, 1, 3} + OS{0, 2, 3}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebra;
pub mod broken_circuits;
pub mod config;
pub mod error;
pub mod ordering;
pub mod product;
pub mod reducer;
pub mod repr;
pub mod sign;
pub mod subset;
pub mod table;

#[cfg(test)]
mod proptests;

pub use algebra::{OrlikSolomonAlgebra, OsElement};
pub use broken_circuits::{BrokenCircuit, BrokenCircuitTable};
pub use config::AlgebraConfig;
pub use error::{AlgebraError, Result};
pub use ordering::OrderingIndex;
pub use product::BasisProductEngine;
pub use reducer::{CacheStats, SubsetReducer};
pub use repr::ElementDisplay;
pub use sign::Sign;
pub use subset::{Rank, RankSet};
pub use table::TableEntry;
