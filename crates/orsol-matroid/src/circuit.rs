//! Matroids given by an explicit list of circuits.

use std::fmt::{self, Debug};
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::MatroidError;
use crate::matroid::Matroid;
use crate::Result;

/// A matroid described by its ground set and its circuits.
///
/// The constructor checks that the data is well formed (circuits are
/// nonempty duplicate-free subsets of the ground set, none containing
/// another). It does not check the circuit elimination axiom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircuitMatroid<E> {
    groundset: Vec<E>,
    circuits: Vec<Vec<E>>,
}

impl<E: Clone + Eq + Hash + Ord + Debug> CircuitMatroid<E> {
    /// Creates a matroid from its ground set and circuits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGroundSet` if the ground set repeats an element and
    /// `InvalidCircuit` for malformed circuits.
    pub fn new(groundset: Vec<E>, circuits: Vec<Vec<E>>) -> Result<Self> {
        let mut groundset = groundset;
        groundset.sort();
        if let Some(w) = groundset.windows(2).find(|w| w[0] == w[1]) {
            return Err(MatroidError::InvalidGroundSet(format!(
                "{:?} appears twice",
                w[0]
            )));
        }

        let members: FxHashSet<&E> = groundset.iter().collect();
        let mut normalized: Vec<Vec<E>> = Vec::with_capacity(circuits.len());
        for circuit in circuits {
            let mut circuit = circuit;
            circuit.sort();
            if circuit.is_empty() {
                return Err(MatroidError::InvalidCircuit("empty circuit".to_string()));
            }
            if let Some(x) = circuit.iter().find(|x| !members.contains(x)) {
                return Err(MatroidError::InvalidCircuit(format!(
                    "{x:?} is not in the ground set"
                )));
            }
            if circuit.windows(2).any(|w| w[0] == w[1]) {
                return Err(MatroidError::InvalidCircuit(format!(
                    "{circuit:?} repeats an element"
                )));
            }
            normalized.push(circuit);
        }

        normalized.sort();
        normalized.dedup();
        for (i, c) in normalized.iter().enumerate() {
            for (j, d) in normalized.iter().enumerate() {
                if i != j && c.len() <= d.len() && c.iter().all(|x| d.binary_search(x).is_ok()) {
                    return Err(MatroidError::InvalidCircuit(format!(
                        "{c:?} is contained in {d:?}"
                    )));
                }
            }
        }

        Ok(Self {
            groundset,
            circuits: normalized,
        })
    }
}

impl<E: Clone + Eq + Hash + Ord + Debug> Matroid for CircuitMatroid<E> {
    type Element = E;

    fn groundset(&self) -> Vec<E> {
        self.groundset.clone()
    }

    fn circuits(&self) -> Vec<Vec<E>> {
        self.circuits.clone()
    }
}

impl<E> fmt::Display for CircuitMatroid<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matroid on {} elements with {} circuits",
            self.groundset.len(),
            self.circuits.len()
        )
    }
}
