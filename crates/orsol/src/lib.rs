//! # Orsol
//!
//! Orlik-Solomon algebras of matroids in Rust.
//!
//! The Orlik-Solomon algebra of a matroid is the exterior algebra on its
//! ground set modulo the boundaries of its circuits. It computes the
//! cohomology of hyperplane arrangement complements, and its basis is
//! indexed by the no-broken-circuit sets of the matroid.
//!
//! ## Features
//!
//! - **Coefficient Rings**: arbitrary precision `Z` and `Q`, prime fields
//! - **Matroids**: uniform, graphic (complete graphs, wheels), explicit circuits
//! - **NBC Basis**: broken circuits and NBC sets under any total order
//! - **Reduction**: memoized rewriting of any subset into the NBC basis
//! - **Products**: cached basis products, parallel multiplication tables
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orsol::prelude::*;
//!
//! let os = OrlikSolomonAlgebra::<usize, Z>::new(&GraphicMatroid::complete(4))?;
//! assert_eq!(os.dimensions_by_degree(), vec![1, 6, 11, 6]);
//!
//! let x = os.subset_image(&[3, 4, 5])?;
//! assert!(x.is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use orsol_algebra as algebra;
pub use orsol_matroid as matroid;
pub use orsol_module as module;
pub use orsol_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use orsol_algebra::{AlgebraConfig, AlgebraError, OrlikSolomonAlgebra, OsElement, RankSet};
    pub use orsol_matroid::{CircuitMatroid, GraphicMatroid, Matroid, UniformMatroid};
    pub use orsol_module::{Graded, LinearCombination};
    pub use orsol_rings::{CommutativeRing, Field, FiniteField, Ring, Q, Z};
}
