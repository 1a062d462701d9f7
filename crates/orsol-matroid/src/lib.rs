//! # orsol-matroid
//!
//! Finite matroids described by their circuits.
//!
//! This crate provides:
//! - The `Matroid` trait: ground set, circuits, broken circuits, NBC sets
//! - Uniform matroids `U(r, n)`
//! - Graphic matroids of multigraphs (complete graphs, wheels)
//! - Matroids given by an explicit list of circuits
//!
//! Everything that depends on a total order of the ground set (broken
//! circuits, NBC sets) takes an optional ordering; `None` means the
//! natural `Ord` order of the elements.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod circuit;
pub mod error;
pub mod graphic;
pub mod matroid;
pub mod nbc;
pub mod subsets;
pub mod uniform;

#[cfg(test)]
mod proptests;

pub use circuit::CircuitMatroid;
pub use error::MatroidError;
pub use graphic::GraphicMatroid;
pub use matroid::Matroid;
pub use nbc::{rank_map, NbcEnumerator};
pub use uniform::UniformMatroid;

/// Result type for matroid operations.
pub type Result<T> = std::result::Result<T, MatroidError>;
